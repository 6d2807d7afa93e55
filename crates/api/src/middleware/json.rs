//! JSON body extractor with declarative validation.

use axum::extract::{FromRequest, Request};
use axum::Json;
use gorello_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but every rejection becomes a 400 and the payload's
/// [`Validate`] rules run before the handler sees it.
///
/// Malformed bodies yield `BAD_REQUEST`; rule violations yield
/// `VALIDATION_ERROR` listing the offending fields.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        validate_input(&value)?;
        Ok(ValidatedJson(value))
    }
}
