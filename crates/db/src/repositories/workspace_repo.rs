//! Repository for the `workspaces` table.

use gorello_core::roles::ROLE_OWNER;
use gorello_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_workspace_role::UserWorkspaceRole;
use crate::models::workspace::{CreateWorkspace, UpdateWorkspace, Workspace, WorkspaceWithOwner};
use crate::repositories::user_workspace_role_repo::COLUMNS as ROLE_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for workspaces.
pub struct WorkspaceRepo;

impl WorkspaceRepo {
    /// Insert a workspace and the owner role record for `owner_id`.
    ///
    /// Both rows are written in one transaction: if the role insert fails
    /// (e.g. the owner does not exist) the workspace insert is rolled back.
    pub async fn create_with_owner(
        pool: &PgPool,
        input: &CreateWorkspace,
        owner_id: DbId,
    ) -> Result<WorkspaceWithOwner, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workspaces (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let workspace = sqlx::query_as::<_, Workspace>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO user_workspace_roles (user_id, workspace_id, role)
             VALUES ($1, $2, $3)
             RETURNING {ROLE_COLUMNS}"
        );
        let role = sqlx::query_as::<_, UserWorkspaceRole>(&query)
            .bind(owner_id)
            .bind(workspace.id)
            .bind(ROLE_OWNER)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(WorkspaceWithOwner { workspace, role })
    }

    /// Find a live workspace by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workspace>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM workspaces WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Workspace>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the live workspaces a user holds a live role in, oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Workspace>, sqlx::Error> {
        sqlx::query_as::<_, Workspace>(
            "SELECT w.id, w.name, w.description, w.created_at, w.updated_at
             FROM workspaces w
             JOIN user_workspace_roles r ON r.workspace_id = w.id
             WHERE r.user_id = $1
               AND r.deleted_at IS NULL
               AND w.deleted_at IS NULL
             ORDER BY w.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Update a workspace. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkspace,
    ) -> Result<Option<Workspace>, sqlx::Error> {
        let query = format!(
            "UPDATE workspaces SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workspace>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a workspace by ID, along with its tasks, their sub-tasks,
    /// and its role records, in one transaction.
    ///
    /// Returns `true` if the workspace row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE workspaces SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE sub_tasks SET deleted_at = NOW()
             WHERE deleted_at IS NULL
               AND task_id IN (SELECT id FROM tasks WHERE workspace_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE tasks SET deleted_at = NOW() WHERE workspace_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE user_workspace_roles SET deleted_at = NOW()
             WHERE workspace_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
