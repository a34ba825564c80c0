//! Delivery of documentation change batches.

use async_trait::async_trait;
use chrono::DateTime;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};
use std::{path::Path, sync::Arc};

use crate::server::{error::AppError, model::docs::DocChange};

/// Discord rejects embed descriptions longer than 4096 characters; keep headroom for the
/// overflow line.
const DESCRIPTION_BUDGET: usize = 4000;
const DOCS_EMBED_COLOUR: u32 = 0x5865F2;

/// Receives a non-empty batch of documentation changes.
#[async_trait]
pub trait DocUpdateSink: Send + Sync {
    async fn send_updates(&self, changes: &[DocChange]) -> Result<(), AppError>;
}

/// Posts documentation changes as a single embed in a Discord channel.
pub struct DiscordDocsSink {
    http: Arc<Http>,
    channel_id: ChannelId,
    site_url: Option<String>,
}

impl DiscordDocsSink {
    /// Creates a new sink.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client shared with the bot
    /// - `channel_id` - Channel receiving the announcements
    /// - `site_url` - Base URL of the published docs, used to link each file
    pub fn new(http: Arc<Http>, channel_id: ChannelId, site_url: Option<String>) -> Self {
        Self {
            http,
            channel_id,
            site_url,
        }
    }
}

#[async_trait]
impl DocUpdateSink for DiscordDocsSink {
    async fn send_updates(&self, changes: &[DocChange]) -> Result<(), AppError> {
        let embed = build_docs_update_embed(changes, self.site_url.as_deref());
        let message = CreateMessage::new().embed(embed);

        self.channel_id.send_message(&self.http, message).await?;

        tracing::info!(
            "Announced {} documentation change(s) in channel {}",
            changes.len(),
            self.channel_id
        );

        Ok(())
    }
}

/// Builds the announcement embed listing every change.
///
/// Each line names the file, linked to the published page when `site_url` is set, and
/// its revision time rendered as a Discord timestamp. Lines that would overflow the
/// description limit are summarised as "…and N more".
pub fn build_docs_update_embed(changes: &[DocChange], site_url: Option<&str>) -> CreateEmbed {
    let mut description = String::new();
    let mut shown = 0;

    for change in changes {
        let line = format_change_line(change, site_url);
        if description.len() + line.len() + 1 > DESCRIPTION_BUDGET {
            break;
        }
        description.push_str(&line);
        description.push('\n');
        shown += 1;
    }

    let hidden = changes.len() - shown;
    if hidden > 0 {
        description.push_str(&format!("…and {} more", hidden));
    }

    CreateEmbed::new()
        .title("📚 Documentation updated")
        .description(description.trim_end())
        .colour(DOCS_EMBED_COLOUR)
}

fn format_change_line(change: &DocChange, site_url: Option<&str>) -> String {
    let when = format_revision(&change.last_update);

    match site_url {
        Some(site_url) => format!(
            "• [`{}`]({}) updated {}",
            change.file,
            doc_url(site_url, &change.file),
            when
        ),
        None => format!("• `{}` updated {}", change.file, when),
    }
}

/// Renders an RFC 3339 revision as a Discord timestamp, or verbatim otherwise.
fn format_revision(revision: &str) -> String {
    match DateTime::parse_from_rfc3339(revision) {
        Ok(timestamp) => format!("<t:{}:f>", timestamp.timestamp()),
        Err(_) => revision.to_string(),
    }
}

/// `docs/getting-started.md` on `https://docs.example` -> `https://docs.example/docs/getting-started`
fn doc_url(site_url: &str, file: &str) -> String {
    let page = Path::new(file).with_extension("");
    format!(
        "{}/{}",
        site_url.trim_end_matches('/'),
        page.to_string_lossy()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(file: &str, last_update: &str) -> DocChange {
        DocChange {
            file: file.to_string(),
            last_update: last_update.to_string(),
        }
    }

    #[test]
    fn renders_rfc3339_as_discord_timestamp() {
        assert_eq!(format_revision("2025-06-30T12:00:00Z"), "<t:1751284800:f>");
    }

    #[test]
    fn keeps_unparseable_revision_verbatim() {
        assert_eq!(format_revision("yesterday"), "yesterday");
    }

    #[test]
    fn builds_doc_url_without_extension() {
        assert_eq!(
            doc_url("https://docs.practa.tech/", "docs/getting-started.md"),
            "https://docs.practa.tech/docs/getting-started"
        );
    }

    #[test]
    fn embed_lists_every_change() {
        let changes = vec![
            change("docs/file1.md", "2025-06-30T12:00:00Z"),
            change("docs/file2.md", "2025-06-29T10:00:00Z"),
        ];

        let embed = serde_json::to_value(build_docs_update_embed(&changes, None)).unwrap();

        assert_eq!(embed["title"], "📚 Documentation updated");
        assert_eq!(
            embed["description"],
            "• `docs/file1.md` updated <t:1751284800:f>\n• `docs/file2.md` updated <t:1751191200:f>"
        );
    }

    #[test]
    fn embed_links_files_when_site_url_is_set() {
        let changes = vec![change("docs/file1.md", "2025-06-30T12:00:00Z")];

        let embed = serde_json::to_value(build_docs_update_embed(
            &changes,
            Some("https://docs.practa.tech"),
        ))
        .unwrap();

        assert_eq!(
            embed["description"],
            "• [`docs/file1.md`](https://docs.practa.tech/docs/file1) updated <t:1751284800:f>"
        );
    }

    #[test]
    fn embed_summarises_overflowing_changes() {
        let changes: Vec<DocChange> = (0..200)
            .map(|i| change(&format!("docs/page-{:03}.md", i), "2025-06-30T12:00:00Z"))
            .collect();

        let embed = serde_json::to_value(build_docs_update_embed(&changes, None)).unwrap();
        let description = embed["description"].as_str().unwrap();

        assert!(description.chars().count() <= 4096);
        assert!(description.ends_with("more"));
        assert!(description.starts_with("• `docs/page-000.md`"));
    }
}
