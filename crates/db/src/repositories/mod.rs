//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every read excludes
//! soft-deleted rows.

pub mod sub_task_repo;
pub mod task_repo;
pub mod user_repo;
pub mod user_workspace_role_repo;
pub mod workspace_repo;

pub use sub_task_repo::SubTaskRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
pub use user_workspace_role_repo::UserWorkspaceRoleRepo;
pub use workspace_repo::WorkspaceRepo;
