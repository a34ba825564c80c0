use serenity::all::CreateEmbedFooter;

/// Embed footer with the bot avatar as icon, when one is known.
pub fn bot_footer(text: &str, avatar_url: Option<&str>) -> CreateEmbedFooter {
    let footer = CreateEmbedFooter::new(text);
    match avatar_url {
        Some(url) => footer.icon_url(url),
        None => footer,
    }
}
