//! Data transfer objects exposed by the HTTP API.

pub mod api;
pub mod embed;
