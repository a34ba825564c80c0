//! Direct-message greeting for new members.

use serenity::all::{CreateEmbed, CreateMessage, User};
use serenity::http::Http;

use crate::server::{error::AppError, util::embed::bot_footer};

const WELCOME_COLOUR: u32 = 0x5865F2;

pub struct WelcomeService<'a> {
    http: &'a Http,
}

impl<'a> WelcomeService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Sends the welcome embed to `user` by DM.
    ///
    /// Members with DMs closed make this fail; callers treat that as non-fatal.
    ///
    /// # Returns
    /// - `Ok(())` - DM delivered
    /// - `Err(AppError::DiscordErr)` - DM channel could not be opened or written
    pub async fn greet(&self, user: &User, avatar_url: Option<&str>) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(build_welcome_embed(&user.name, avatar_url));
        user.direct_message(self.http, message).await?;

        tracing::info!("Sent welcome DM to {}", user.name);

        Ok(())
    }
}

pub fn build_welcome_embed(username: &str, avatar_url: Option<&str>) -> CreateEmbed {
    CreateEmbed::new()
        .colour(WELCOME_COLOUR)
        .title("🎉 Welcome to PRACTA Beta!")
        .description(format!(
            "Hello **{}**, we're glad to have you here!\n\nOur official launch is coming soon! 🚀",
            username
        ))
        .footer(bot_footer("PRACTA Beta Access", avatar_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_member_by_username() {
        let embed = serde_json::to_value(build_welcome_embed("ada", None)).unwrap();

        assert_eq!(embed["title"], "🎉 Welcome to PRACTA Beta!");
        assert_eq!(
            embed["description"],
            "Hello **ada**, we're glad to have you here!\n\nOur official launch is coming soon! 🚀"
        );
        assert_eq!(embed["color"], WELCOME_COLOUR);
        assert_eq!(embed["footer"]["text"], "PRACTA Beta Access");
    }
}
