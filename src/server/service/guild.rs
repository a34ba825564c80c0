//! Single-guild allow-list.

use serenity::all::{Guild, GuildId};
use serenity::http::Http;

use crate::server::error::AppError;

/// Whether the bot stayed in a guild it was handed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GuildAdmission {
    Allowed,
    Left,
}

pub struct GuildService<'a> {
    http: &'a Http,
    allowed: GuildId,
}

impl<'a> GuildService<'a> {
    pub fn new(http: &'a Http, allowed: GuildId) -> Self {
        Self { http, allowed }
    }

    pub fn is_allowed(&self, guild_id: GuildId) -> bool {
        guild_id == self.allowed
    }

    /// Leaves `guild` unless it is the allowed guild.
    ///
    /// # Returns
    /// - `Ok(GuildAdmission::Allowed)` - Guild is the configured one
    /// - `Ok(GuildAdmission::Left)` - Bot left the guild
    /// - `Err(AppError::DiscordErr)` - Leaving failed
    pub async fn enforce(&self, guild: &Guild) -> Result<GuildAdmission, AppError> {
        if self.is_allowed(guild.id) {
            return Ok(GuildAdmission::Allowed);
        }

        guild.id.leave(self.http).await?;

        tracing::info!(
            "Left unauthorized guild: {} ({})",
            guild.name,
            guild.id
        );

        Ok(GuildAdmission::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_guild;

    const ALLOWED: u64 = 1376209757467054181;

    #[test]
    fn allows_configured_guild() {
        let http = Http::new("");
        let service = GuildService::new(&http, GuildId::new(ALLOWED));
        let guild = create_test_guild(ALLOWED, "MITPA");

        assert!(service.is_allowed(guild.id));
    }

    #[test]
    fn rejects_other_guilds() {
        let http = Http::new("");
        let service = GuildService::new(&http, GuildId::new(ALLOWED));
        let guild = create_test_guild(1376209757467054182, "Somewhere else");

        assert!(!service.is_allowed(guild.id));
    }

    /// Tests that the allowed guild is admitted without any Discord request.
    ///
    /// The HTTP client has no token, so any request would fail.
    ///
    /// Expected: Ok(GuildAdmission::Allowed)
    #[tokio::test]
    async fn admits_allowed_guild_without_requests() {
        let http = Http::new("");
        let service = GuildService::new(&http, GuildId::new(ALLOWED));
        let guild = create_test_guild(ALLOWED, "MITPA");

        let admission = service.enforce(&guild).await.unwrap();

        assert_eq!(admission, GuildAdmission::Allowed);
    }
}
