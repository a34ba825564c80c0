//! Slash-commands-only channel enforcement.

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Message};
use serenity::http::Http;

use crate::server::error::AppError;

const NOTICE_COLOUR: u32 = 0xFFA500;

/// What to do with a message posted in the guild.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MessageAction {
    Ignore,
    /// Delete the message and tell the author why.
    Police,
}

impl MessageAction {
    /// Decides how to treat `message` given the monitored channel, if any.
    ///
    /// Bot messages are never policed so the bot cannot trip over its own posts.
    pub fn for_message(message: &Message, monitored: Option<ChannelId>) -> Self {
        match monitored {
            Some(channel_id) if !message.author.bot && message.channel_id == channel_id => {
                Self::Police
            }
            _ => Self::Ignore,
        }
    }
}

pub struct MonitoredChannelService<'a> {
    http: &'a Http,
}

impl<'a> MonitoredChannelService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Deletes `message` and DMs its author the slash-commands notice.
    ///
    /// # Returns
    /// - `Ok(())` - Message removed and author notified
    /// - `Err(AppError::DiscordErr)` - Deletion failed (no DM is sent) or the DM failed
    pub async fn police(&self, message: &Message) -> Result<(), AppError> {
        message.delete(self.http).await?;

        tracing::debug!(
            "Deleted message {} from {} in monitored channel {}",
            message.id,
            message.author.name,
            message.channel_id
        );

        message
            .author
            .direct_message(self.http, CreateMessage::new().embed(build_notice_embed()))
            .await?;

        Ok(())
    }
}

pub fn build_notice_embed() -> CreateEmbed {
    CreateEmbed::new()
        .colour(NOTICE_COLOUR)
        .title("⚠️ Notice")
        .description("This channel only supports slash commands.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_message;

    const MONITORED: u64 = 1387000000000000001;
    const OTHER: u64 = 1387000000000000002;
    const MEMBER_ID: u64 = 200000000000000001;
    const BOT_ID: u64 = 900000000000000001;

    #[test]
    fn polices_member_message_in_monitored_channel() {
        let message = create_test_message(1, MONITORED, MEMBER_ID, false, false);

        assert_eq!(
            MessageAction::for_message(&message, Some(ChannelId::new(MONITORED))),
            MessageAction::Police
        );
    }

    #[test]
    fn ignores_bot_message_in_monitored_channel() {
        let message = create_test_message(1, MONITORED, BOT_ID, true, false);

        assert_eq!(
            MessageAction::for_message(&message, Some(ChannelId::new(MONITORED))),
            MessageAction::Ignore
        );
    }

    #[test]
    fn ignores_other_channels() {
        let message = create_test_message(1, OTHER, MEMBER_ID, false, false);

        assert_eq!(
            MessageAction::for_message(&message, Some(ChannelId::new(MONITORED))),
            MessageAction::Ignore
        );
    }

    #[test]
    fn ignores_everything_without_monitored_channel() {
        let message = create_test_message(1, MONITORED, MEMBER_ID, false, false);

        assert_eq!(
            MessageAction::for_message(&message, None),
            MessageAction::Ignore
        );
    }

    #[test]
    fn notice_explains_channel_rule() {
        let embed = serde_json::to_value(build_notice_embed()).unwrap();

        assert_eq!(embed["title"], "⚠️ Notice");
        assert_eq!(
            embed["description"],
            "This channel only supports slash commands."
        );
    }
}
