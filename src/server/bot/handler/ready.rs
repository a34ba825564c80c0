//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. It performs the one-time setup that needs a live
//! connection:
//! - Register slash commands in the allowed guild
//! - Post the rules prompt (once per process)
//! - Render the launch countdown immediately instead of waiting for the first tick

use chrono::Utc;
use serenity::all::{Context, Ready};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::server::{
    config::Config,
    service::{command::CommandService, countdown::CountdownService, rules::RulesService},
};

/// Handles the ready event when the bot connects to Discord.
///
/// `ready` fires again after a session is invalidated, so the rules prompt is guarded by
/// `rules_posted`. Command registration and the countdown refresh are idempotent.
///
/// # Arguments
/// - `config` - Application configuration
/// - `rules_posted` - Flag shared across ready events
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, rules_posted: &AtomicBool, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let avatar_url = ready.user.face();

    if let Err(e) = CommandService::new(&ctx.http)
        .register(config.allowed_guild_id)
        .await
    {
        tracing::error!("Failed to register slash commands: {}", e);
    }

    if let Some(channel_id) = config.rules_channel_id {
        if !rules_posted.swap(true, Ordering::SeqCst) {
            if let Err(e) = RulesService::new(&ctx.http)
                .post_prompt(channel_id, Some(&avatar_url))
                .await
            {
                tracing::error!("Failed to post rules prompt in channel {}: {}", channel_id, e);
                rules_posted.store(false, Ordering::SeqCst);
            }
        }
    }

    if let (Some(launch), Some(channel_id)) = (config.launch_timestamp, config.welcome_channel_id)
    {
        let countdown = CountdownService::new(ctx.http.clone(), channel_id, launch);
        if let Err(e) = countdown.refresh(Utc::now()).await {
            tracing::error!("Failed to refresh launch countdown: {}", e);
        }
    }
}
