//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, FieldErrors};

/// JSON body extractor that runs the payload's validation rules.
///
/// A body that is not JSON, or is not an object the payload can be read from,
/// is rejected the same way as a rule failure: `400` with the error envelope
/// and a `body` entry. Field-level problems are left to the payload's rules.
/// The handler only runs once the body is known to be valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_error)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn body_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");

    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => "The request body must be sent as JSON.",
        JsonRejection::JsonSyntaxError(_) => "The request body must be valid JSON.",
        JsonRejection::JsonDataError(_) => "The request body must be a JSON object.",
        _ => "The request body could not be read.",
    };

    let mut errors = FieldErrors::new();
    errors.insert("body".to_string(), vec![message.to_string()]);
    AppError::validation("Validation failed", errors)
}
