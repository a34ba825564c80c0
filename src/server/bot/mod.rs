//! Discord bot integration.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it never
//! blocks the HTTP server. Its HTTP client is shared with the scheduler and the relay
//! endpoint so every Discord call goes through one rate limiter.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, used to enforce the guild allow-list
//! - `GUILD_MESSAGES` - Messages in the slash-commands-only channel
//! - `GUILD_MEMBERS` - Member joins for the welcome DM (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
