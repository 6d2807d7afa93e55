pub mod auth;
pub mod health;
pub mod metrics;
pub mod user;
pub mod workspace;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                         register (public)
/// /auth/login                                          login (public)
///
/// /users                                               directory
/// /users/search?keyword=                               search
/// /users/{username}                                    own profile: get, update, delete
///
/// /workspaces                                          list, create
/// /workspaces/{workspace_id}                           description, update, delete
/// /workspaces/{workspace_id}/tasks                     list, create
/// /workspaces/{workspace_id}/tasks/{task_id}           get, update, delete
/// /workspaces/{workspace_id}/tasks/{task_id}/subtasks  list, create
/// /workspaces/{workspace_id}/tasks/{task_id}/subtasks/{sub_task_id}  update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        // Workspace routes (also nests tasks and sub-tasks).
        .nest("/workspaces", workspace::router())
}
