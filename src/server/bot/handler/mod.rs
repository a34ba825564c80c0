use serenity::all::{Context, EventHandler, Guild, Interaction, Member, Message, Ready};
use serenity::async_trait;
use std::sync::{atomic::AtomicBool, Arc};

use crate::server::config::Config;

pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    /// Set once the rules prompt has been posted so gateway reconnects do not repost it.
    pub rules_posted: AtomicBool,
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            rules_posted: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, &self.rules_posted, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.config, ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.config, ctx, message).await;
    }

    /// Called for button presses and slash commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.config, ctx, interaction).await;
    }
}
