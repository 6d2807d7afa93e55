//! Handlers for the `/users` resource.
//!
//! The directory and search endpoints are open to any authenticated user.
//! Profile endpoints only act on the caller's own account.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gorello_core::error::CoreError;
use gorello_core::search::normalize_keyword;
use gorello_core::validation::normalize_email;
use gorello_db::models::user::{UpdateUser, User, UserDirectoryEntry, UserResponse, UserSearchResult};
use gorello_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::handlers::empty_string_as_none;
use crate::middleware::auth::CurrentUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::params::{PathParams, QueryParams};
use crate::state::AppState;

/// Query parameters for `GET /users/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// Request body for `PUT /users/{username}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100), email)]
    pub email: String,
    /// Empty or absent keeps the current password.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 8))]
    pub password: Option<String>,
}

/// Return the caller's own record, or 403 when the path names someone else.
fn ensure_self(CurrentUser(user): CurrentUser, username: &str) -> AppResult<User> {
    if user.username != username {
        tracing::warn!(caller = %user.username, target = %username, "Profile access denied");
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only access your own profile".into(),
        )));
    }
    Ok(user)
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<UserDirectoryEntry>>> {
    let users = UserRepo::list_directory(&state.pool).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// GET /users/search?keyword=
///
/// Case-insensitive substring match against username or email.
pub async fn search_users(
    State(state): State<AppState>,
    _user: CurrentUser,
    QueryParams(params): QueryParams<SearchParams>,
) -> AppResult<Json<Vec<UserSearchResult>>> {
    let keyword = normalize_keyword(params.keyword.as_deref())
        .ok_or_else(|| AppError::BadRequest("Keyword is required".into()))?;

    let users = UserRepo::search(&state.pool, keyword).await?;
    tracing::debug!(keyword, count = users.len(), "Searched users");
    Ok(Json(users))
}

/// GET /users/{username}
pub async fn get_profile(
    caller: CurrentUser,
    PathParams(username): PathParams<String>,
) -> AppResult<Json<UserResponse>> {
    let user = ensure_self(caller, &username)?;
    Ok(Json(user.into()))
}

/// PUT /users/{username}
///
/// Overwrites the email; rehashes the password only when one is supplied.
pub async fn update_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
    PathParams(username): PathParams<String>,
    ValidatedJson(input): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = ensure_self(caller, &username)?;

    let email = normalize_email(&input.email);
    if let Some(other) = UserRepo::find_by_email(&state.pool, &email).await? {
        if other.id != user.id {
            return Err(AppError::BadRequest("Email already in use".into()));
        }
    }

    let password_hash = input
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update(
        &state.pool,
        user.id,
        &UpdateUser {
            email,
            password_hash,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "User",
        id: user.id,
    }))?;

    tracing::info!(user_id = updated.id, "User profile updated");
    Ok(Json(updated.into()))
}

/// DELETE /users/{username}
///
/// Soft-deletes the caller's account and its workspace role records.
pub async fn delete_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
    PathParams(username): PathParams<String>,
) -> AppResult<StatusCode> {
    let user = ensure_self(caller, &username)?;

    let deleted = UserRepo::soft_delete(&state.pool, user.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }));
    }

    tracing::info!(user_id = user.id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
