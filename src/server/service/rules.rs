//! Rules confirmation prompt and role grant.
//!
//! A single message with an "agree" button is posted in the rules channel. Pressing the
//! button grants the configured role, which unlocks the rest of the server.

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, Member,
    Message, RoleId,
};
use serenity::http::Http;

use crate::server::{error::AppError, util::embed::bot_footer};

/// Custom id of the "agree" button.
pub const ACCEPT_RULES_ID: &str = "accept_rules";

pub const GRANTED_REPLY: &str = "✅ You have been granted access to the chat!";
pub const ERROR_REPLY: &str = "❌ An error occurred while assigning the role.";

const RULES_COLOUR: u32 = 0x5865F2;

/// Outcome of a member pressing the "agree" button.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RulesAcceptance {
    /// The role was added.
    Granted,
    /// The member already held the role; nothing was changed.
    AlreadyAccepted,
}

pub struct RulesService<'a> {
    http: &'a Http,
}

impl<'a> RulesService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Posts the rules prompt in `channel_id`.
    ///
    /// # Arguments
    /// - `channel_id` - Rules channel
    /// - `avatar_url` - Bot avatar shown in the footer
    ///
    /// # Returns
    /// - `Ok(Message)` - The posted prompt
    /// - `Err(AppError::DiscordErr)` - Channel missing or not writable
    pub async fn post_prompt(
        &self,
        channel_id: ChannelId,
        avatar_url: Option<&str>,
    ) -> Result<Message, AppError> {
        let message = channel_id
            .send_message(self.http, build_rules_prompt(avatar_url))
            .await?;

        tracing::info!("Posted rules prompt in channel {}", channel_id);

        Ok(message)
    }

    /// Grants `role_id` to `member` unless they already hold it.
    ///
    /// # Returns
    /// - `Ok(RulesAcceptance::Granted)` - Role added
    /// - `Ok(RulesAcceptance::AlreadyAccepted)` - Member already had the role
    /// - `Err(AppError::DiscordErr)` - Discord refused the role change
    pub async fn accept_rules(
        &self,
        member: &Member,
        role_id: RoleId,
    ) -> Result<RulesAcceptance, AppError> {
        if has_accepted(member, role_id) {
            return Ok(RulesAcceptance::AlreadyAccepted);
        }

        member.add_role(self.http, role_id).await?;

        tracing::info!(
            "Granted rules role {} to {} in guild {}",
            role_id,
            member.user.name,
            member.guild_id
        );

        Ok(RulesAcceptance::Granted)
    }
}

pub fn has_accepted(member: &Member, role_id: RoleId) -> bool {
    member.roles.contains(&role_id)
}

pub fn build_rules_embed(avatar_url: Option<&str>) -> CreateEmbed {
    CreateEmbed::new()
        .colour(RULES_COLOUR)
        .title("📜 Community Rules")
        .description(
            "Please read the server rules carefully! To participate, you must agree to all of them.\n\n\
             Click the button below to confirm that you have read and agree to the rules.",
        )
        .footer(bot_footer("MITPA | Rules Confirmation", avatar_url))
}

pub fn build_accept_button() -> CreateButton {
    CreateButton::new(ACCEPT_RULES_ID)
        .label("I have read and agree to the rules")
        .style(ButtonStyle::Success)
}

pub fn build_rules_prompt(avatar_url: Option<&str>) -> CreateMessage {
    CreateMessage::new()
        .embed(build_rules_embed(avatar_url))
        .components(vec![CreateActionRow::Buttons(vec![build_accept_button()])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_member;

    const GUILD_ID: u64 = 1376209757467054181;
    const RULES_ROLE_ID: u64 = 1387566249877180436;

    #[test]
    fn member_without_role_has_not_accepted() {
        let member = create_test_member(GUILD_ID, 200000000000000001, "newcomer", &[]);
        assert!(!has_accepted(&member, RoleId::new(RULES_ROLE_ID)));
    }

    #[test]
    fn member_with_role_has_accepted() {
        let member = create_test_member(
            GUILD_ID,
            200000000000000001,
            "regular",
            &[300000000000000001, RULES_ROLE_ID],
        );
        assert!(has_accepted(&member, RoleId::new(RULES_ROLE_ID)));
    }

    #[test]
    fn rules_embed_has_title_and_footer() {
        let embed = serde_json::to_value(build_rules_embed(Some(
            "https://cdn.discordapp.com/avatars/1/a.png",
        )))
        .unwrap();

        assert_eq!(embed["title"], "📜 Community Rules");
        assert_eq!(embed["color"], RULES_COLOUR);
        assert_eq!(embed["footer"]["text"], "MITPA | Rules Confirmation");
        assert_eq!(
            embed["footer"]["icon_url"],
            "https://cdn.discordapp.com/avatars/1/a.png"
        );
        assert!(embed["description"]
            .as_str()
            .unwrap()
            .contains("agree to the rules"));
    }

    #[test]
    fn accept_button_uses_rules_custom_id() {
        let button = serde_json::to_value(build_accept_button()).unwrap();

        assert_eq!(button["custom_id"], ACCEPT_RULES_ID);
        assert_eq!(button["label"], "I have read and agree to the rules");
    }
}
