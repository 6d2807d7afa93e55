//! Handlers for the `/workspaces` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gorello_core::error::CoreError;
use gorello_core::types::DbId;
use gorello_core::validation::NOT_BLANK_RE;
use gorello_db::models::workspace::{
    CreateWorkspace, UpdateWorkspace, Workspace, WorkspaceWithOwner,
};
use gorello_db::repositories::WorkspaceRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::empty_string_as_none;
use crate::middleware::auth::CurrentUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::rbac::WorkspaceMember;
use crate::state::AppState;

/// Request body for `POST /workspaces`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkspaceRequest {
    #[serde(default)]
    #[validate(length(max = 100), regex(path = *NOT_BLANK_RE))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub description: String,
}

/// Request body for `PUT /workspaces/{workspace_id}`. Empty fields are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkspaceRequest {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100), regex(path = *NOT_BLANK_RE))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100))]
    pub description: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Workspace",
        id,
    })
}

/// GET /workspaces
///
/// Workspaces the caller holds a role in.
pub async fn list_workspaces(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Workspace>>> {
    let workspaces = WorkspaceRepo::list_for_user(&state.pool, user.id).await?;
    tracing::debug!(user_id = user.id, count = workspaces.len(), "Listed workspaces");
    Ok(Json(workspaces))
}

/// POST /workspaces
///
/// Creates the workspace and the caller's owner role atomically.
pub async fn create_workspace(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(input): ValidatedJson<CreateWorkspaceRequest>,
) -> AppResult<(StatusCode, Json<WorkspaceWithOwner>)> {
    let created = WorkspaceRepo::create_with_owner(
        &state.pool,
        &CreateWorkspace {
            name: input.name,
            description: input.description,
        },
        user.id,
    )
    .await?;

    tracing::info!(
        workspace_id = created.workspace.id,
        owner_id = user.id,
        "Workspace created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /workspaces/{workspace_id}
///
/// Returns the workspace description as a bare JSON string.
pub async fn get_workspace_description(
    State(state): State<AppState>,
    member: WorkspaceMember,
) -> AppResult<Json<String>> {
    let workspace = WorkspaceRepo::find_by_id(&state.pool, member.workspace_id)
        .await?
        .ok_or_else(|| not_found(member.workspace_id))?;
    Ok(Json(workspace.description))
}

/// PUT /workspaces/{workspace_id}
pub async fn update_workspace(
    State(state): State<AppState>,
    member: WorkspaceMember,
    ValidatedJson(input): ValidatedJson<UpdateWorkspaceRequest>,
) -> AppResult<Json<Workspace>> {
    let workspace = WorkspaceRepo::update(
        &state.pool,
        member.workspace_id,
        &UpdateWorkspace {
            name: input.name,
            description: input.description,
        },
    )
    .await?
    .ok_or_else(|| not_found(member.workspace_id))?;

    tracing::info!(workspace_id = workspace.id, user_id = member.user.id, "Workspace updated");
    Ok(Json(workspace))
}

/// DELETE /workspaces/{workspace_id}
///
/// Soft-deletes the workspace with its tasks, sub-tasks, and role records.
pub async fn delete_workspace(
    State(state): State<AppState>,
    member: WorkspaceMember,
) -> AppResult<StatusCode> {
    let deleted = WorkspaceRepo::soft_delete(&state.pool, member.workspace_id).await?;
    if !deleted {
        return Err(not_found(member.workspace_id));
    }

    tracing::info!(
        workspace_id = member.workspace_id,
        user_id = member.user.id,
        "Workspace deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
