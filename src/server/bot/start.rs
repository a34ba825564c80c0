use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// Returning the HTTP client separately lets other components send messages before the
/// gateway connection is established.
///
/// # Arguments
/// - `config` - Application configuration, shared with the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: Arc<Config>) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let token = config.discord_token.clone();
    let handler = Handler::new(config);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the client to the gateway.
///
/// Blocks until the shards shut down, so call it from a spawned task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
