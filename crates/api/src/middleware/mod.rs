//! Request extractors and middleware functions.
//!
//! - [`auth::AuthUser`] -- Verifies the JWT Bearer token and exposes the user id and username.
//! - [`auth::CurrentUser`] -- Resolves the authenticated user's live row.
//! - [`rbac::WorkspaceMember`] -- Requires a role in the workspace named by the path.
//! - [`json::ValidatedJson`] -- Deserializes and validates a JSON body.
//! - [`params::PathParams`] / [`params::QueryParams`] -- Path and query parsing with JSON errors.
//! - [`metrics::track_metrics`] -- Records per-route request counts and latency.

pub mod auth;
pub mod json;
pub mod metrics;
pub mod params;
pub mod rbac;
