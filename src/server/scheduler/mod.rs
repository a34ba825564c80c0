//! Cron jobs driving the documentation watcher and the launch countdown.
//!
//! Jobs are only registered for features whose target channel is configured. The
//! returned `JobScheduler` is owned by the entry point, which shuts it down on Ctrl-C.

pub mod countdown;
pub mod docs_watcher;

use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

use crate::server::{config::Config, error::AppError};

/// Creates the scheduler, registers every enabled job and starts it.
///
/// # Arguments
/// - `config` - Application configuration
/// - `discord_http` - Discord HTTP client for posting messages
/// - `http_client` - HTTP client for the GitHub API
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler
/// - `Err(AppError)` - A cron expression is invalid or the scheduler failed to start
pub async fn start_scheduler(
    config: &Config,
    discord_http: Arc<Http>,
    http_client: reqwest::Client,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    match config.docs.channel_id {
        Some(channel_id) => {
            let job = docs_watcher::docs_watcher_job(
                &config.docs,
                channel_id,
                discord_http.clone(),
                http_client,
            )?;
            scheduler.add(job).await?;
            tracing::info!(
                "Documentation watcher scheduled with cron '{}'",
                config.docs.cron
            );
        }
        None => tracing::info!("DOCS_CHANNEL_ID not set, documentation watcher disabled"),
    }

    match (config.launch_timestamp, config.welcome_channel_id) {
        (Some(launch), Some(channel_id)) => {
            let job =
                countdown::countdown_job(&config.countdown_cron, discord_http, channel_id, launch)?;
            scheduler.add(job).await?;
            tracing::info!(
                "Launch countdown scheduled with cron '{}'",
                config.countdown_cron
            );
        }
        _ => tracing::info!(
            "LAUNCH_TIMESTAMP or WELCOME_CHANNEL_ID not set, launch countdown disabled"
        ),
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(scheduler)
}
