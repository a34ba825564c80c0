use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::{auth::AuthError, AppError};

/// Checks the `Authorization: Bearer` header against the configured API key.
pub struct ApiKeyGuard<'a> {
    expected: Option<&'a str>,
    headers: &'a HeaderMap,
}

impl<'a> ApiKeyGuard<'a> {
    pub fn new(expected: Option<&'a str>, headers: &'a HeaderMap) -> Self {
        Self { expected, headers }
    }

    /// Requires a matching bearer key when one is configured.
    ///
    /// # Returns
    /// - `Ok(())` - No key is configured, or the request carries the configured key
    /// - `Err(AppError::AuthErr(MissingApiKey))` - No bearer token on the request
    /// - `Err(AppError::AuthErr(InvalidApiKey))` - Bearer token does not match
    pub fn require(&self) -> Result<(), AppError> {
        let Some(expected) = self.expected else {
            return Ok(());
        };

        let Some(provided) = bearer_token(self.headers) else {
            return Err(AuthError::MissingApiKey.into());
        };

        if !constant_time_eq(provided.as_bytes(), expected.as_bytes()) {
            return Err(AuthError::InvalidApiKey.into());
        }

        Ok(())
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
