use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// Prometheus text exposition format, version 0.0.4.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /metrics -- HTTP request counters in Prometheus text format.
async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], state.metrics.render())
}

/// Mount the metrics route at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics))
}
