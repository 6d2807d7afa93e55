//! Repository for the `user_workspace_roles` table.

use gorello_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_workspace_role::UserWorkspaceRole;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, user_id, workspace_id, role, created_at, updated_at";

/// Provides operations on workspace membership records.
pub struct UserWorkspaceRoleRepo;

impl UserWorkspaceRoleRepo {
    /// Find the live role record matching BOTH the user and the workspace.
    ///
    /// This is the membership rule: a user belongs to a workspace iff this
    /// returns `Some`.
    pub async fn find_membership(
        pool: &PgPool,
        user_id: DbId,
        workspace_id: DbId,
    ) -> Result<Option<UserWorkspaceRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_workspace_roles
             WHERE user_id = $1 AND workspace_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, UserWorkspaceRole>(&query)
            .bind(user_id)
            .bind(workspace_id)
            .fetch_optional(pool)
            .await
    }
}
