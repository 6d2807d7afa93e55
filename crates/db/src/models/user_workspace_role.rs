//! Membership record linking a user to a workspace with a role level.

use gorello_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_workspace_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserWorkspaceRole {
    pub id: DbId,
    pub user_id: DbId,
    pub workspace_id: DbId,
    /// Role level, see `gorello_core::roles`.
    pub role: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

