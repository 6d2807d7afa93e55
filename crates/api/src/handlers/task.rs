//! Handlers for tasks nested under `/workspaces/{workspace_id}/tasks`.
//!
//! Reads need only an authenticated caller; create, update, and delete
//! require membership in the workspace.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gorello_core::error::CoreError;
use gorello_core::types::DbId;
use gorello_core::validation::NOT_BLANK_RE;
use gorello_db::models::task::{Task, TaskFields};
use gorello_db::repositories::{TaskRepo, WorkspaceRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::params::PathParams;
use crate::middleware::rbac::WorkspaceMember;
use crate::state::AppState;

/// Request body for creating or overwriting a task.
///
/// `name` is accepted in place of `title`.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    #[serde(default, alias = "name")]
    #[validate(length(max = 100), regex(path = *NOT_BLANK_RE))]
    pub title: String,
    #[validate(length(max = 100))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub status: Option<i32>,
    #[validate(length(max = 100))]
    pub estimated_time: Option<String>,
    #[validate(length(max = 100))]
    pub actual_time: Option<String>,
    #[validate(length(max = 100))]
    pub due_date: Option<String>,
    #[validate(range(min = 0))]
    pub priority: Option<i32>,
    pub assignee_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub image_url: Option<String>,
}

impl From<TaskRequest> for TaskFields {
    fn from(req: TaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            estimated_time: req.estimated_time,
            actual_time: req.actual_time,
            due_date: req.due_date,
            priority: req.priority,
            assignee_id: req.assignee_id,
            image_url: req.image_url,
        }
    }
}

pub(crate) fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// Load a live task, scoped to its workspace, or fail with 404.
pub(crate) async fn require_task(
    state: &AppState,
    workspace_id: DbId,
    task_id: DbId,
) -> AppResult<Task> {
    TaskRepo::find_by_id(&state.pool, workspace_id, task_id)
        .await?
        .ok_or_else(|| task_not_found(task_id))
}

/// GET /workspaces/{workspace_id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    _user: CurrentUser,
    PathParams(workspace_id): PathParams<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    WorkspaceRepo::find_by_id(&state.pool, workspace_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workspace",
            id: workspace_id,
        }))?;

    let tasks = TaskRepo::list_by_workspace(&state.pool, workspace_id).await?;
    tracing::debug!(workspace_id, count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// POST /workspaces/{workspace_id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    ValidatedJson(input): ValidatedJson<TaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, member.workspace_id, &input.into()).await?;

    tracing::info!(
        task_id = task.id,
        workspace_id = member.workspace_id,
        user_id = member.user.id,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /workspaces/{workspace_id}/tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    _user: CurrentUser,
    PathParams((workspace_id, task_id)): PathParams<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    let task = require_task(&state, workspace_id, task_id).await?;
    Ok(Json(task))
}

/// PUT /workspaces/{workspace_id}/tasks/{task_id}
///
/// Overwrites every mutable field. Omitted optional fields are cleared.
pub async fn update_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    PathParams((workspace_id, task_id)): PathParams<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<TaskRequest>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.pool, workspace_id, task_id, &input.into())
        .await?
        .ok_or_else(|| task_not_found(task_id))?;

    tracing::info!(task_id, workspace_id, user_id = member.user.id, "Task updated");
    Ok(Json(task))
}

/// DELETE /workspaces/{workspace_id}/tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    PathParams((workspace_id, task_id)): PathParams<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::soft_delete(&state.pool, workspace_id, task_id).await?;
    if !deleted {
        return Err(task_not_found(task_id));
    }

    tracing::info!(task_id, workspace_id, user_id = member.user.id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use gorello_core::validation::validate_input;

    use super::*;

    fn parse(json: &str) -> TaskRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_name_is_an_alias_for_title() {
        let req = parse(r#"{"name": "Write docs"}"#);
        assert_eq!(req.title, "Write docs");
        assert!(validate_input(&req).is_ok());
    }

    #[test]
    fn test_blank_or_missing_title_is_rejected() {
        for body in [r#"{}"#, r#"{"title": ""}"#, r#"{"title": "   "}"#] {
            assert_matches!(validate_input(&parse(body)), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn test_negative_status_is_rejected() {
        let req = parse(r#"{"title": "t", "status": -1}"#);
        assert_matches!(validate_input(&req), Err(CoreError::Validation(msg)) if msg.contains("status"));
    }

    #[test]
    fn test_conversion_keeps_every_field() {
        let req = parse(
            r#"{"title": "t", "description": "d", "status": 2, "priority": 1,
                "assignee_id": 9, "due_date": "2026-11-01", "image_url": "u"}"#,
        );
        let fields: TaskFields = req.into();
        assert_eq!(fields.title, "t");
        assert_eq!(fields.description.as_deref(), Some("d"));
        assert_eq!(fields.status, Some(2));
        assert_eq!(fields.priority, Some(1));
        assert_eq!(fields.assignee_id, Some(9));
        assert_eq!(fields.due_date.as_deref(), Some("2026-11-01"));
        assert_eq!(fields.image_url.as_deref(), Some("u"));
        assert_eq!(fields.estimated_time, None);
    }
}
