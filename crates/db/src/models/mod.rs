//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO where the table supports updates

pub mod sub_task;
pub mod task;
pub mod user;
pub mod user_workspace_role;
pub mod workspace;
