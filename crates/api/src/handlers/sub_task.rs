//! Handlers for sub-tasks nested under a task.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gorello_core::error::CoreError;
use gorello_core::types::DbId;
use gorello_core::validation::NOT_BLANK_RE;
use gorello_db::models::sub_task::{CreateSubTask, SubTask, UpdateSubTask};
use gorello_db::repositories::SubTaskRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::task::require_task;
use crate::middleware::auth::CurrentUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::params::PathParams;
use crate::middleware::rbac::WorkspaceMember;
use crate::state::AppState;

/// Request body for `POST .../subtasks`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubTaskRequest {
    #[serde(default)]
    #[validate(length(max = 100), regex(path = *NOT_BLANK_RE))]
    pub title: String,
    pub assignee_id: Option<DbId>,
}

/// Request body for `PUT .../subtasks/{sub_task_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubTaskRequest {
    #[serde(default)]
    #[validate(length(max = 100), regex(path = *NOT_BLANK_RE))]
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    pub assignee_id: Option<DbId>,
}

fn sub_task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SubTask",
        id,
    })
}

/// GET /workspaces/{workspace_id}/tasks/{task_id}/subtasks
pub async fn list_sub_tasks(
    State(state): State<AppState>,
    _user: CurrentUser,
    PathParams((workspace_id, task_id)): PathParams<(DbId, DbId)>,
) -> AppResult<Json<Vec<SubTask>>> {
    let task = require_task(&state, workspace_id, task_id).await?;
    let sub_tasks = SubTaskRepo::list_by_task(&state.pool, task.id).await?;
    Ok(Json(sub_tasks))
}

/// POST /workspaces/{workspace_id}/tasks/{task_id}/subtasks
pub async fn create_sub_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    PathParams((workspace_id, task_id)): PathParams<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<CreateSubTaskRequest>,
) -> AppResult<(StatusCode, Json<SubTask>)> {
    let task = require_task(&state, workspace_id, task_id).await?;

    let sub_task = SubTaskRepo::create(
        &state.pool,
        &CreateSubTask {
            task_id: task.id,
            title: input.title,
            assignee_id: input.assignee_id,
        },
    )
    .await?;

    tracing::info!(
        sub_task_id = sub_task.id,
        task_id,
        user_id = member.user.id,
        "Sub-task created"
    );

    Ok((StatusCode::CREATED, Json(sub_task)))
}

/// PUT /workspaces/{workspace_id}/tasks/{task_id}/subtasks/{sub_task_id}
pub async fn update_sub_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    PathParams((workspace_id, task_id, sub_task_id)): PathParams<(DbId, DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateSubTaskRequest>,
) -> AppResult<Json<SubTask>> {
    require_task(&state, workspace_id, task_id).await?;

    let sub_task = SubTaskRepo::update(
        &state.pool,
        task_id,
        sub_task_id,
        &UpdateSubTask {
            title: input.title,
            is_completed: input.is_completed,
            assignee_id: input.assignee_id,
        },
    )
    .await?
    .ok_or_else(|| sub_task_not_found(sub_task_id))?;

    tracing::info!(sub_task_id, task_id, user_id = member.user.id, "Sub-task updated");
    Ok(Json(sub_task))
}

/// DELETE /workspaces/{workspace_id}/tasks/{task_id}/subtasks/{sub_task_id}
pub async fn delete_sub_task(
    State(state): State<AppState>,
    member: WorkspaceMember,
    PathParams((workspace_id, task_id, sub_task_id)): PathParams<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_task(&state, workspace_id, task_id).await?;

    if !SubTaskRepo::soft_delete(&state.pool, task_id, sub_task_id).await? {
        return Err(sub_task_not_found(sub_task_id));
    }

    tracing::info!(sub_task_id, task_id, user_id = member.user.id, "Sub-task deleted");
    Ok(StatusCode::NO_CONTENT)
}
