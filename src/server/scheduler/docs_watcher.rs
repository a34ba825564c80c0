use serenity::{all::ChannelId, http::Http};
use std::sync::Arc;
use tokio_cron_scheduler::Job;

use crate::server::{
    config::DocsConfig,
    error::AppError,
    model::docs::WatchOutcome,
    service::docs::{DiscordDocsSink, DocsWatcher, GithubDocsSource, SnapshotStore},
};

/// Builds the cron job running one documentation reconciliation per tick.
///
/// The watcher is shared by every tick so its internal lock can skip a tick while the
/// previous one is still talking to GitHub.
///
/// # Arguments
/// - `config` - Watcher settings
/// - `channel_id` - Channel receiving change announcements
/// - `discord_http` - Discord HTTP client for the announcements
/// - `http_client` - HTTP client for the GitHub API
///
/// # Returns
/// - `Ok(Job)` - Job ready to be added to the scheduler
/// - `Err(AppError)` - The cron expression or GitHub API URL is invalid
pub fn docs_watcher_job(
    config: &DocsConfig,
    channel_id: ChannelId,
    discord_http: Arc<Http>,
    http_client: reqwest::Client,
) -> Result<Job, AppError> {
    let source = GithubDocsSource::new(http_client, config)?;
    let store = SnapshotStore::new(config.cache_file.clone());
    tracing::debug!("Documentation snapshot stored at {}", store.path().display());

    let watcher = Arc::new(DocsWatcher::new(source, store, config.extension.clone()));
    let sink = Arc::new(DiscordDocsSink::new(
        discord_http,
        channel_id,
        config.site_url.clone(),
    ));

    let job = Job::new_async(config.cron.as_str(), move |_uuid, _lock| {
        let watcher = watcher.clone();
        let sink = sink.clone();

        Box::pin(async move {
            match watcher.reconcile(sink.as_ref()).await {
                Ok(WatchOutcome::Skipped) => {}
                Ok(outcome) => {
                    tracing::debug!(
                        "Documentation check finished with {} change(s)",
                        outcome.changes().len()
                    );
                }
                Err(e) => tracing::error!("Error checking documentation updates: {}", e),
            }
        })
    })?;

    Ok(job)
}
