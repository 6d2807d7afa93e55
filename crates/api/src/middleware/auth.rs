//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use gorello_core::error::CoreError;
use gorello_core::types::DbId;
use gorello_db::models::user::User;
use gorello_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Identity extracted from a JWT Bearer token in the `Authorization` header.
///
/// Only the token is checked; use [`CurrentUser`] when the handler needs the
/// user row.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user id carried in `claims.uid`.
    pub user_id: DbId,
    /// The username carried in `claims.sub`.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.uid,
            username: claims.sub,
        })
    }
}

/// The authenticated user's live database row.
///
/// Rejects with 401 when the token is valid but the account it was issued to
/// no longer exists, including when its username now belongs to someone else.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let user = UserRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .filter(|user| user.username == auth.username)
            .ok_or_else(|| {
                tracing::warn!(user_id = auth.user_id, "Token for a deleted account");
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;

        Ok(CurrentUser(user))
    }
}
