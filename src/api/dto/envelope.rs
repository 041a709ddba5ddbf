//! The `{status, message, data?}` wrapper used on every successful response.

use axum::http::StatusCode;
use serde::Serialize;

/// Response envelope.
///
/// `status` duplicates the HTTP status code in the body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}
