//! Guild slash commands.

use serenity::all::{
    CommandInteraction, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId,
};
use serenity::http::Http;

use crate::server::error::AppError;

const COMMAND_EMBED_COLOUR: u32 = 0x5865F2;

pub const BETA_STATUS: &str = "beta_status";
pub const TIMELINE: &str = "timeline";
pub const ABOUT: &str = "about";

/// Reply to a slash command, before it is turned into an interaction response.
#[derive(Clone, Debug)]
pub enum CommandReply {
    Text { content: String, ephemeral: bool },
    Embed(CreateEmbed),
}

impl CommandReply {
    fn ephemeral(content: &str) -> Self {
        Self::Text {
            content: content.to_string(),
            ephemeral: true,
        }
    }

    pub fn into_response(self) -> CreateInteractionResponse {
        let message = match self {
            Self::Text { content, ephemeral } => CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(ephemeral),
            Self::Embed(embed) => CreateInteractionResponseMessage::new().embed(embed),
        };
        CreateInteractionResponse::Message(message)
    }
}

pub struct CommandService<'a> {
    http: &'a Http,
}

impl<'a> CommandService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Replaces the guild's slash commands with the bot's command set.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands registered
    /// - `Err(AppError::DiscordErr)` - Registration failed
    pub async fn register(&self, guild_id: GuildId) -> Result<usize, AppError> {
        let registered = guild_id.set_commands(self.http, commands()).await?;

        tracing::info!(
            "Registered {} slash command(s) in guild {}",
            registered.len(),
            guild_id
        );

        Ok(registered.len())
    }

    /// Answers `command`.
    pub async fn respond(&self, command: &CommandInteraction) -> Result<(), AppError> {
        let reply = reply_for(&command.data.name);
        command
            .create_response(self.http, reply.into_response())
            .await?;
        Ok(())
    }
}

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(BETA_STATUS).description("Show the current beta status"),
        CreateCommand::new(TIMELINE).description("Show the project timeline"),
        CreateCommand::new(ABOUT).description("About this bot"),
    ]
}

pub fn reply_for(name: &str) -> CommandReply {
    match name {
        BETA_STATUS => CommandReply::ephemeral("Beta status: All tests are running correctly."),
        TIMELINE => CommandReply::Embed(
            CreateEmbed::new()
                .colour(COMMAND_EMBED_COLOUR)
                .title("📅 Project Timeline")
                .description(
                    "Pre-Beta: July 1st\nBeta Launch: July 15th\nOfficial Release: August 15th",
                ),
        ),
        ABOUT => CommandReply::Embed(
            CreateEmbed::new()
                .colour(COMMAND_EMBED_COLOUR)
                .title("About MITPA Beta Bot")
                .description(
                    "MITPA Beta Bot is designed to welcome new members and provide a countdown to the official launch.",
                ),
        ),
        _ => CommandReply::ephemeral("Unknown command."),
    }
}
