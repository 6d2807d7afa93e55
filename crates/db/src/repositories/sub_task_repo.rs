//! Repository for the `sub_tasks` table.

use gorello_core::types::DbId;
use sqlx::PgPool;

use crate::models::sub_task::{CreateSubTask, SubTask, UpdateSubTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, task_id, is_completed, assignee_id, created_at, updated_at";

/// Provides CRUD operations for sub-tasks.
pub struct SubTaskRepo;

impl SubTaskRepo {
    /// Insert a new sub-task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubTask) -> Result<SubTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_tasks (task_id, title, assignee_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(input.task_id)
            .bind(&input.title)
            .bind(input.assignee_id)
            .fetch_one(pool)
            .await
    }

    /// List the live sub-tasks of a task, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sub_tasks
             WHERE task_id = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a sub-task's title, completion flag, and assignee.
    ///
    /// Returns `None` if no live row with the given `id` exists under `task_id`.
    pub async fn update(
        pool: &PgPool,
        task_id: DbId,
        id: DbId,
        input: &UpdateSubTask,
    ) -> Result<Option<SubTask>, sqlx::Error> {
        let query = format!(
            "UPDATE sub_tasks SET
                title = $3,
                is_completed = $4,
                assignee_id = $5
             WHERE id = $1 AND task_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(id)
            .bind(task_id)
            .bind(&input.title)
            .bind(input.is_completed)
            .bind(input.assignee_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a sub-task. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, task_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sub_tasks SET deleted_at = NOW()
             WHERE id = $1 AND task_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(task_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
