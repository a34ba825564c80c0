use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for relaying a message or embed into a Discord channel.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    /// Discord channel ID (snowflake)
    #[schema(example = "123456789012345678")]
    pub channel_id: String,
    /// Plain message content, required when `isEmbed` is false
    #[schema(example = "Hello world!")]
    pub message_content: Option<String>,
    /// Send as an embed instead of plain content
    #[serde(default)]
    pub is_embed: bool,
    #[schema(example = "Nice Title")]
    pub embed_title: Option<String>,
    #[schema(example = "Embed description")]
    pub embed_description: Option<String>,
    /// Hex colour, e.g. `#0099ff`
    #[schema(example = "#0099ff")]
    pub embed_color: Option<String>,
    #[schema(example = "Optional footer")]
    pub embed_footer: Option<String>,
}
