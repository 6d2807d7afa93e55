//! Task entity model and DTOs.

use gorello_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: i32,
    pub estimated_time: Option<String>,
    pub actual_time: Option<String>,
    pub due_date: Option<String>,
    pub priority: i32,
    pub workspace_id: DbId,
    pub assignee_id: Option<DbId>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The mutable fields of a task.
///
/// Used for both inserts and updates: an update overwrites every field, so
/// a `None` clears the stored value and a missing status/priority resets to 0.
#[derive(Debug, Clone, Default)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<i32>,
    pub estimated_time: Option<String>,
    pub actual_time: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<i32>,
    pub assignee_id: Option<DbId>,
    pub image_url: Option<String>,
}
