//! User entity model and DTOs.

use gorello_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Row returned by the keyword search (`id`, `username`, `email` only).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSearchResult {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

/// Entry in the public user directory (`username`, `email` only).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserDirectoryEntry {
    pub username: String,
    pub email: String,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for overwriting a user's profile.
///
/// `email` always replaces the stored value; `password_hash` only when `Some`.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub email: String,
    pub password_hash: Option<String>,
}
