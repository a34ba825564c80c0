use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::error::AppError;

/// Timeout applied to every outgoing request made with the shared HTTP client.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise `info`. Calling this more than
/// once keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Builds the HTTP client used for the GitHub API.
///
/// GitHub rejects requests without a User-Agent, and a bounded timeout keeps one hung
/// request from stalling the documentation watcher forever.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
