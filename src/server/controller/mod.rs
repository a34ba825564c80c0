//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs into validated requests, call a service and
//! map the result back to a DTO. Errors are returned as `AppError`, whose
//! `IntoResponse` implementation picks the status code.

pub mod embed;
pub mod health;
