//! Workspace membership extractor.
//!
//! A user is a member of a workspace iff a live role record matches BOTH the
//! user's id and the workspace id. [`WorkspaceMember`] enforces that rule at
//! the type level for every route carrying a `{workspace_id}` segment.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gorello_core::error::CoreError;
use gorello_core::types::DbId;
use gorello_db::models::user::User;
use gorello_db::models::user_workspace_role::UserWorkspaceRole;
use gorello_db::repositories::UserWorkspaceRoleRepo;
use serde::Deserialize;

use super::auth::CurrentUser;
use super::params::PathParams;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
struct WorkspaceIdParam {
    workspace_id: DbId,
}

/// Authenticated user holding a role in the path's workspace. Rejects with
/// 403 Forbidden otherwise.
///
/// ```ignore
/// async fn members_only(member: WorkspaceMember) -> AppResult<Json<()>> {
///     tracing::info!(workspace_id = member.workspace_id, role = member.role.role, "ok");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WorkspaceMember {
    pub user: User,
    pub workspace_id: DbId,
    pub role: UserWorkspaceRole,
}

impl FromRequestParts<AppState> for WorkspaceMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        let PathParams(WorkspaceIdParam { workspace_id }) =
            PathParams::<WorkspaceIdParam>::from_request_parts(parts, state).await?;

        let role = UserWorkspaceRoleRepo::find_membership(&state.pool, user.id, workspace_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = user.id, workspace_id, "Workspace access denied");
                AppError::Core(CoreError::Forbidden(
                    "Access denied to the workspace".into(),
                ))
            })?;

        Ok(WorkspaceMember {
            user,
            workspace_id,
            role,
        })
    }
}
