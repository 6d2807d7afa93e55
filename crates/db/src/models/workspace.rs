//! Workspace entity model and DTOs.

use gorello_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::user_workspace_role::UserWorkspaceRole;

/// A workspace row from the `workspaces` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workspace {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new workspace.
#[derive(Debug, Clone)]
pub struct CreateWorkspace {
    pub name: String,
    pub description: String,
}

/// DTO for updating a workspace. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspace {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A freshly created workspace together with its owner role record.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceWithOwner {
    pub workspace: Workspace,
    pub role: UserWorkspaceRole,
}
