use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry an `Authorization: Bearer` header.
    #[error("Request is missing an API key")]
    MissingApiKey,

    /// Request carried an API key that does not match the configured one.
    #[error("Request carried an invalid API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with the same message so callers cannot
/// distinguish a missing key from a wrong one. The specific reason is logged at debug
/// level.
///
/// # Returns
/// - 401 Unauthorized - For every authentication failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
