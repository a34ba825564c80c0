//! Member event handler sending the welcome DM.

use serenity::all::{Context, Member};

use crate::server::service::welcome::WelcomeService;

/// Handles a member joining the guild by DMing them the welcome embed.
///
/// Members with DMs disabled are common, so failures are logged at warn level only.
pub async fn handle_guild_member_addition(ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let avatar_url = ctx.cache.current_user().face();

    if let Err(e) = WelcomeService::new(&ctx.http)
        .greet(&new_member.user, Some(&avatar_url))
        .await
    {
        tracing::warn!(
            "Failed to send welcome DM to {}: {}",
            new_member.user.name,
            e
        );
    }
}
