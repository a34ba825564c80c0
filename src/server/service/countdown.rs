//! Launch countdown embed kept up to date in the welcome channel.

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelId, CreateEmbed, CreateMessage, EditMessage, GetMessages, Message, MessageId, UserId,
};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{error::AppError, model::countdown::Countdown, util::embed::bot_footer};

const COUNTDOWN_COLOUR: u32 = 0xFF0000;

/// How far back to look for a countdown message to reuse.
const HISTORY_LIMIT: u8 = 10;

/// What a refresh did.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CountdownRefresh {
    /// Launch time has passed; nothing was posted.
    Finished,
    /// An existing countdown message was edited.
    Edited(MessageId),
    /// No countdown message was found so a new one was sent.
    Sent(MessageId),
}

pub struct CountdownService {
    http: Arc<Http>,
    channel_id: ChannelId,
    launch: DateTime<Utc>,
}

impl CountdownService {
    pub fn new(http: Arc<Http>, channel_id: ChannelId, launch: DateTime<Utc>) -> Self {
        Self {
            http,
            channel_id,
            launch,
        }
    }

    /// Brings the countdown embed in the welcome channel up to date.
    ///
    /// Reuses the most recent bot message carrying an embed among the last ten messages,
    /// so restarts do not pile up countdown posts.
    ///
    /// # Arguments
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(CountdownRefresh)` - What was done
    /// - `Err(AppError::DiscordErr)` - Fetching, editing or sending failed
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<CountdownRefresh, AppError> {
        let Some(countdown) = Countdown::until(self.launch, now) else {
            return Ok(CountdownRefresh::Finished);
        };

        let bot = self.http.get_current_user().await?;
        let avatar_url = bot.face();
        let embed = build_countdown_embed(&countdown, Some(&avatar_url));

        let recent = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(HISTORY_LIMIT))
            .await?;

        match find_countdown_message(&recent, bot.id) {
            Some(message_id) => {
                self.channel_id
                    .edit_message(&self.http, message_id, EditMessage::new().embed(embed))
                    .await?;

                tracing::debug!("Updated countdown message {} to {}", message_id, countdown);

                Ok(CountdownRefresh::Edited(message_id))
            }
            None => {
                let message = self
                    .channel_id
                    .send_message(&self.http, CreateMessage::new().embed(embed))
                    .await?;

                tracing::info!(
                    "Posted countdown message {} in channel {}",
                    message.id,
                    self.channel_id
                );

                Ok(CountdownRefresh::Sent(message.id))
            }
        }
    }
}

/// Returns the newest message authored by `bot_id` that carries an embed.
///
/// `messages` is expected newest first, as Discord returns channel history.
pub fn find_countdown_message(messages: &[Message], bot_id: UserId) -> Option<MessageId> {
    messages
        .iter()
        .find(|message| message.author.id == bot_id && !message.embeds.is_empty())
        .map(|message| message.id)
}

pub fn build_countdown_embed(countdown: &Countdown, avatar_url: Option<&str>) -> CreateEmbed {
    CreateEmbed::new()
        .colour(COUNTDOWN_COLOUR)
        .title("⏳ MITPA Launch Countdown")
        .description(format!(
            "The official launch is coming!\n\n**{}** left!",
            countdown
        ))
        .footer(bot_footer("Stay ready. It’s coming…", avatar_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_message;

    const CHANNEL_ID: u64 = 1376209757467054181;
    const BOT_ID: u64 = 900000000000000001;
    const MEMBER_ID: u64 = 200000000000000001;

    #[test]
    fn renders_remaining_time() {
        let countdown = Countdown {
            days: 12,
            hours: 5,
            minutes: 0,
            seconds: 9,
        };

        let embed = serde_json::to_value(build_countdown_embed(&countdown, None)).unwrap();

        assert_eq!(embed["title"], "⏳ MITPA Launch Countdown");
        assert_eq!(
            embed["description"],
            "The official launch is coming!\n\n**12d 5h 0m 9s** left!"
        );
        assert_eq!(embed["color"], COUNTDOWN_COLOUR);
        assert_eq!(embed["footer"]["text"], "Stay ready. It’s coming…");
    }

    #[test]
    fn picks_newest_bot_message_with_embed() {
        let messages = vec![
            create_test_message(5, CHANNEL_ID, MEMBER_ID, false, false),
            create_test_message(4, CHANNEL_ID, BOT_ID, true, false),
            create_test_message(3, CHANNEL_ID, BOT_ID, true, true),
            create_test_message(2, CHANNEL_ID, BOT_ID, true, true),
        ];

        assert_eq!(
            find_countdown_message(&messages, UserId::new(BOT_ID)),
            Some(MessageId::new(3))
        );
    }

    #[test]
    fn ignores_embeds_from_other_authors() {
        let messages = vec![
            create_test_message(2, CHANNEL_ID, MEMBER_ID, false, true),
            create_test_message(1, CHANNEL_ID, 900000000000000002, true, true),
        ];

        assert_eq!(find_countdown_message(&messages, UserId::new(BOT_ID)), None);
    }

    #[test]
    fn empty_history_has_no_countdown_message() {
        assert_eq!(find_countdown_message(&[], UserId::new(BOT_ID)), None);
    }
}
