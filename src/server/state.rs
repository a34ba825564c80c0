//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use serenity::http::Http;
use std::sync::Arc;

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `Arc<Http>` is a reference-counted pointer
/// - `Option<Arc<str>>` shares the key without copying it per request
#[derive(Clone)]
pub struct AppState {
    /// Discord HTTP client shared with the bot, used to relay messages.
    pub discord_http: Arc<Http>,

    /// Bearer key required on API requests, if configured.
    ///
    /// When `None` the API is open; deployments are expected to keep it on a private
    /// network in that case.
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `discord_http` - Discord HTTP client for bot operations
    /// - `api_key` - Optional bearer key protecting the API
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(discord_http: Arc<Http>, api_key: Option<String>) -> Self {
        Self {
            discord_http,
            api_key: api_key.map(Arc::from),
        }
    }
}
