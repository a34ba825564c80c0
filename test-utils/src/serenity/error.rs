//! Test factory for Discord HTTP failures.

use serenity::http::{ErrorResponse, HttpError};

/// Creates the error serenity returns when Discord answers a request with `status`.
///
/// # Arguments
/// - `status` - HTTP status Discord responded with
/// - `code` - Discord JSON error code, e.g. `10003` for Unknown Channel
/// - `message` - Discord JSON error message
///
/// # Returns
/// - `serenity::Error::Http(HttpError::UnsuccessfulRequest(..))`
///
/// # Panics
/// - If `status` is not a valid HTTP status code
pub async fn create_test_http_error(status: u16, code: isize, message: &str) -> serenity::Error {
    let body = serde_json::json!({ "code": code, "message": message }).to_string();
    let response = http::Response::builder()
        .status(status)
        .body(body)
        .expect("Failed to build test response");

    let response =
        ErrorResponse::from_response(reqwest::Response::from(response), reqwest::Method::POST)
            .await;

    serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
}
