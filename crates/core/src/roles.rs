//! Workspace role levels stored in `user_workspace_roles.role`.
//!
//! Rows inserted without an explicit role get the column default `0`
//! (plain member). Only the owner level is assigned by the service.

/// Owner of a workspace. Assigned to the creator when the workspace is made.
pub const ROLE_OWNER: i32 = 1;
