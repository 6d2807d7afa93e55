//! Repository for the `users` table.

use gorello_core::search::contains_pattern;
use gorello_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User, UserDirectoryEntry, UserSearchResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a live user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a live user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE username = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a live user by email, ignoring case.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1) AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over username and email.
    ///
    /// Wildcard characters in `keyword` are matched literally.
    pub async fn search(
        pool: &PgPool,
        keyword: &str,
    ) -> Result<Vec<UserSearchResult>, sqlx::Error> {
        sqlx::query_as::<_, UserSearchResult>(
            "SELECT id, username, email FROM users
             WHERE deleted_at IS NULL AND (username ILIKE $1 OR email ILIKE $1)
             ORDER BY username",
        )
        .bind(contains_pattern(keyword))
        .fetch_all(pool)
        .await
    }

    /// List username and email of every live user, ordered by username.
    pub async fn list_directory(pool: &PgPool) -> Result<Vec<UserDirectoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, UserDirectoryEntry>(
            "SELECT username, email FROM users WHERE deleted_at IS NULL ORDER BY username",
        )
        .fetch_all(pool)
        .await
    }

    /// Overwrite a user's email and, when provided, password hash.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = $2,
                password_hash = COALESCE($3, password_hash)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a user by ID together with their workspace memberships.
    ///
    /// Returns `true` if the user row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result =
            sqlx::query("UPDATE users SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE user_workspace_roles SET deleted_at = NOW()
             WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
