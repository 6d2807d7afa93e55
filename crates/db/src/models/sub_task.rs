//! Sub-task entity model and DTOs.

use gorello_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sub_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubTask {
    pub id: DbId,
    pub title: String,
    pub task_id: DbId,
    pub is_completed: bool,
    pub assignee_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sub-task under a task.
#[derive(Debug, Clone)]
pub struct CreateSubTask {
    pub task_id: DbId,
    pub title: String,
    pub assignee_id: Option<DbId>,
}

/// DTO for overwriting a sub-task.
#[derive(Debug, Clone)]
pub struct UpdateSubTask {
    pub title: String,
    pub is_completed: bool,
    pub assignee_id: Option<DbId>,
}
