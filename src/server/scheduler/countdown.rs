use chrono::{DateTime, Utc};
use serenity::{all::ChannelId, http::Http};
use std::sync::Arc;
use tokio_cron_scheduler::Job;

use crate::server::{
    error::AppError,
    service::countdown::{CountdownRefresh, CountdownService},
};

/// Builds the cron job refreshing the launch countdown embed.
///
/// Once the launch time has passed every tick is a no-op.
///
/// # Returns
/// - `Ok(Job)` - Job ready to be added to the scheduler
/// - `Err(AppError::SchedulerErr)` - `cron` is not a valid expression
pub fn countdown_job(
    cron: &str,
    discord_http: Arc<Http>,
    channel_id: ChannelId,
    launch: DateTime<Utc>,
) -> Result<Job, AppError> {
    let service = Arc::new(CountdownService::new(discord_http, channel_id, launch));

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let service = service.clone();

        Box::pin(async move {
            match service.refresh(Utc::now()).await {
                Ok(CountdownRefresh::Finished) => {
                    tracing::debug!("Launch time reached, countdown no longer updated");
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error refreshing launch countdown: {}", e),
            }
        })
    })?;

    Ok(job)
}
