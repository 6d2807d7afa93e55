//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /              -> list_users
/// GET    /search        -> search_users
/// GET    /{username}    -> get_profile
/// PUT    /{username}    -> update_profile
/// DELETE /{username}    -> delete_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users))
        .route("/search", get(user::search_users))
        .route(
            "/{username}",
            get(user::get_profile)
                .put(user::update_profile)
                .delete(user::delete_profile),
        )
}
