//! Repository for the `tasks` table.
//!
//! Lookups are scoped by workspace so a task id from one workspace cannot be
//! addressed through another workspace's URL.

use gorello_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{Task, TaskFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, estimated_time, actual_time, due_date, \
                       priority, workspace_id, assignee_id, image_url, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task into a workspace, returning the created row.
    ///
    /// Missing `status` and `priority` default to 0.
    pub async fn create(
        pool: &PgPool,
        workspace_id: DbId,
        input: &TaskFields,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (workspace_id, title, description, status, estimated_time,
                                actual_time, due_date, priority, assignee_id, image_url)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, $6, $7, COALESCE($8, 0), $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(workspace_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.estimated_time)
            .bind(&input.actual_time)
            .bind(&input.due_date)
            .bind(input.priority)
            .bind(input.assignee_id)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a live task by ID within a workspace.
    pub async fn find_by_id(
        pool: &PgPool,
        workspace_id: DbId,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE id = $1 AND workspace_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(workspace_id)
            .fetch_optional(pool)
            .await
    }

    /// List all live tasks of a workspace, oldest first.
    pub async fn list_by_workspace(
        pool: &PgPool,
        workspace_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE workspace_id = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(workspace_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable field of a task.
    ///
    /// Returns `None` if no live row with the given `id` exists in the workspace.
    pub async fn update(
        pool: &PgPool,
        workspace_id: DbId,
        id: DbId,
        input: &TaskFields,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $3,
                description = $4,
                status = COALESCE($5, 0),
                estimated_time = $6,
                actual_time = $7,
                due_date = $8,
                priority = COALESCE($9, 0),
                assignee_id = $10,
                image_url = $11
             WHERE id = $1 AND workspace_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(workspace_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.estimated_time)
            .bind(&input.actual_time)
            .bind(&input.due_date)
            .bind(input.priority)
            .bind(input.assignee_id)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a task and its sub-tasks in one transaction.
    ///
    /// Returns `true` if the task row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        workspace_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE tasks SET deleted_at = NOW()
             WHERE id = $1 AND workspace_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(workspace_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE sub_tasks SET deleted_at = NOW() WHERE task_id = $1 AND deleted_at IS NULL")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
