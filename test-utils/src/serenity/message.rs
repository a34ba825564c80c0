//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message shaped like a gateway `MESSAGE_CREATE` payload.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Author user ID
/// - `author_is_bot` - Whether the author is a bot account
/// - `with_embed` - Whether the message carries a single rich embed
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_is_bot: bool,
    with_embed: bool,
) -> Message {
    let embeds = if with_embed {
        serde_json::json!([{ "type": "rich", "title": "⏳ MITPA Launch Countdown" }])
    } else {
        serde_json::json!([])
    };

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": if author_is_bot { "MITPA Beta Bot" } else { "member" },
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": author_is_bot,
        },
        "content": if with_embed { "" } else { "hello" },
        "timestamp": "2025-07-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": embeds,
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
