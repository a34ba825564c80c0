//! Guild event handler enforcing the guild allow-list.
//!
//! `guild_create` fires for every guild on startup and whenever the bot is added to a
//! new one, so this is the single place unauthorized guilds are caught.

use serenity::all::{Context, Guild};

use crate::server::{
    config::Config,
    service::guild::{GuildAdmission, GuildService},
};

/// Handles the guild_create event, leaving any guild other than the allowed one.
///
/// # Arguments
/// - `config` - Application configuration holding the allowed guild
/// - `ctx` - Discord context
/// - `guild` - Guild that became available
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub async fn handle_guild_create(
    config: &Config,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count
    );

    match GuildService::new(&ctx.http, config.allowed_guild_id)
        .enforce(&guild)
        .await
    {
        Ok(GuildAdmission::Allowed) => {}
        Ok(GuildAdmission::Left) => {
            tracing::warn!("Bot was added to unauthorized guild {}", guild.id);
        }
        Err(e) => {
            tracing::error!("Failed to leave unauthorized guild {}: {}", guild.id, e);
        }
    }
}
