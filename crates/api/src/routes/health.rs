use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /healthz -- liveness check, empty 204.
async fn healthz() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
