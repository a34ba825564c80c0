use serenity::all::{Context, Message};

use crate::server::{
    config::Config,
    service::monitor::{MessageAction, MonitoredChannelService},
};

/// Handle message creation in a channel
pub async fn handle_message(config: &Config, ctx: Context, message: Message) {
    if MessageAction::for_message(&message, config.monitored_channel_id) == MessageAction::Ignore {
        return;
    }

    if let Err(e) = MonitoredChannelService::new(&ctx.http)
        .police(&message)
        .await
    {
        tracing::error!(
            "Failed to enforce slash-commands-only channel {} for message {}: {}",
            message.channel_id,
            message.id,
            e
        );
    }
}
