//! Route definitions for the `/workspaces` resource.
//!
//! Also nests task and sub-task routes under
//! `/workspaces/{workspace_id}/tasks/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{sub_task, task, workspace};
use crate::state::AppState;

/// Routes mounted at `/workspaces`.
///
/// ```text
/// GET    /                                                  -> list_workspaces
/// POST   /                                                  -> create_workspace
/// GET    /{workspace_id}                                    -> get_workspace_description
/// PUT    /{workspace_id}                                    -> update_workspace
/// DELETE /{workspace_id}                                    -> delete_workspace
///
/// GET    /{workspace_id}/tasks                              -> list_tasks
/// POST   /{workspace_id}/tasks                              -> create_task
/// GET    /{workspace_id}/tasks/{task_id}                    -> get_task
/// PUT    /{workspace_id}/tasks/{task_id}                    -> update_task
/// DELETE /{workspace_id}/tasks/{task_id}                    -> delete_task
///
/// GET    /{workspace_id}/tasks/{task_id}/subtasks           -> list_sub_tasks
/// POST   /{workspace_id}/tasks/{task_id}/subtasks           -> create_sub_task
/// PUT    /{workspace_id}/tasks/{task_id}/subtasks/{id}      -> update_sub_task
/// DELETE /{workspace_id}/tasks/{task_id}/subtasks/{id}      -> delete_sub_task
/// ```
pub fn router() -> Router<AppState> {
    let sub_task_routes = Router::new()
        .route(
            "/",
            get(sub_task::list_sub_tasks).post(sub_task::create_sub_task),
        )
        .route(
            "/{sub_task_id}",
            put(sub_task::update_sub_task).delete(sub_task::delete_sub_task),
        );

    let task_routes = Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route(
            "/{task_id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .nest("/{task_id}/subtasks", sub_task_routes);

    Router::new()
        .route(
            "/",
            get(workspace::list_workspaces).post(workspace::create_workspace),
        )
        .route(
            "/{workspace_id}",
            get(workspace::get_workspace_description)
                .put(workspace::update_workspace)
                .delete(workspace::delete_workspace),
        )
        .nest("/{workspace_id}/tasks", task_routes)
}
