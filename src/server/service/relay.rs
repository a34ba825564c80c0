//! Relaying API requests into Discord channels.

use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::http::Http;

use crate::{
    model::embed::SendMessageDto,
    server::{
        error::AppError,
        util::parse::{is_valid_snowflake, parse_hex_colour, parse_u64_from_string},
    },
};

pub const DEFAULT_EMBED_COLOUR: u32 = 0x0099FF;

pub const INVALID_INPUT: &str = "Invalid input data";
const INVALID_CONTENT: &str = "Invalid message content";

/// Validated message ready to be sent.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum RelayBody {
    Text(String),
    Embed {
        title: String,
        description: String,
        colour: u32,
        footer: String,
    },
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RelayRequest {
    pub channel_id: ChannelId,
    pub body: RelayBody,
}

impl RelayRequest {
    /// Validates an API payload.
    ///
    /// # Returns
    /// - `Ok(RelayRequest)` - Payload is well formed
    /// - `Err(AppError::BadRequest)` - Channel id is not a snowflake, an embed field is
    ///   empty, the colour is not hex, or plain content is empty
    pub fn from_dto(dto: SendMessageDto) -> Result<Self, AppError> {
        if !is_valid_snowflake(&dto.channel_id) {
            return Err(AppError::BadRequest(INVALID_INPUT.to_string()));
        }
        let channel_id = match parse_u64_from_string(dto.channel_id)? {
            0 => return Err(AppError::BadRequest(INVALID_INPUT.to_string())),
            id => ChannelId::new(id),
        };

        let body = if dto.is_embed {
            let title = non_empty(dto.embed_title).ok_or_else(invalid_input)?;
            let description = non_empty(dto.embed_description).ok_or_else(invalid_input)?;
            let footer = non_empty(dto.embed_footer).ok_or_else(invalid_input)?;
            let colour = match non_empty(dto.embed_color) {
                Some(colour) => parse_hex_colour(&colour).ok_or_else(invalid_input)?,
                None => DEFAULT_EMBED_COLOUR,
            };

            RelayBody::Embed {
                title,
                description,
                colour,
                footer,
            }
        } else {
            let content = non_empty(dto.message_content)
                .ok_or_else(|| AppError::BadRequest(INVALID_CONTENT.to_string()))?;
            RelayBody::Text(content)
        };

        Ok(Self { channel_id, body })
    }

    pub fn to_message(&self) -> CreateMessage {
        match &self.body {
            RelayBody::Text(content) => CreateMessage::new().content(content),
            RelayBody::Embed {
                title,
                description,
                colour,
                footer,
            } => CreateMessage::new().embed(
                CreateEmbed::new()
                    .title(title)
                    .description(description)
                    .colour(*colour)
                    .footer(CreateEmbedFooter::new(footer)),
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn invalid_input() -> AppError {
    AppError::BadRequest(INVALID_INPUT.to_string())
}

pub struct RelayService<'a> {
    http: &'a Http,
}

impl<'a> RelayService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Sends a validated request.
    ///
    /// # Returns
    /// - `Ok(())` - Message posted
    /// - `Err(AppError::NotFound)` - Discord does not know the channel
    /// - `Err(AppError::DiscordErr)` - Any other Discord failure
    pub async fn send(&self, request: &RelayRequest) -> Result<(), AppError> {
        let result = request
            .channel_id
            .send_message(self.http, request.to_message())
            .await
            .map_err(AppError::from);

        match result {
            Ok(message) => {
                tracing::info!(
                    "Relayed message {} to channel {}",
                    message.id,
                    request.channel_id
                );
                Ok(())
            }
            Err(e) => Err(relay_error(e, request.channel_id)),
        }
    }
}

/// Reports an unknown channel as 404 and leaves every other failure untouched.
fn relay_error(err: AppError, channel_id: ChannelId) -> AppError {
    if err.is_discord_not_found() {
        tracing::debug!("Relay target channel {} not found", channel_id);
        AppError::NotFound("Channel not found".to_string())
    } else {
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};
    use test_utils::serenity::create_test_http_error;

    const CHANNEL: &str = "123456789012345678";

    fn embed_dto() -> SendMessageDto {
        SendMessageDto {
            channel_id: CHANNEL.to_string(),
            is_embed: true,
            embed_title: Some("Nice Title".to_string()),
            embed_description: Some("Embed description".to_string()),
            embed_color: Some("#ff0000".to_string()),
            embed_footer: Some("Optional footer".to_string()),
            ..Default::default()
        }
    }

    fn text_dto(content: &str) -> SendMessageDto {
        SendMessageDto {
            channel_id: CHANNEL.to_string(),
            message_content: Some(content.to_string()),
            ..Default::default()
        }
    }

    fn assert_bad_request(result: Result<RelayRequest, AppError>, expected: &str) {
        match result {
            Err(AppError::BadRequest(message)) => assert_eq!(message, expected),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn accepts_plain_message() {
        let request = RelayRequest::from_dto(text_dto("Hello world!")).unwrap();

        assert_eq!(request.channel_id, ChannelId::new(123456789012345678));
        assert_eq!(request.body, RelayBody::Text("Hello world!".to_string()));
    }

    #[test]
    fn accepts_embed_with_colour() {
        let request = RelayRequest::from_dto(embed_dto()).unwrap();

        assert_eq!(
            request.body,
            RelayBody::Embed {
                title: "Nice Title".to_string(),
                description: "Embed description".to_string(),
                colour: 0xFF0000,
                footer: "Optional footer".to_string(),
            }
        );
    }

    #[test]
    fn embed_colour_defaults_when_absent_or_empty() {
        for colour in [None, Some(String::new())] {
            let dto = SendMessageDto {
                embed_color: colour,
                ..embed_dto()
            };

            match RelayRequest::from_dto(dto).unwrap().body {
                RelayBody::Embed { colour, .. } => assert_eq!(colour, DEFAULT_EMBED_COLOUR),
                other => panic!("expected an embed body, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_malformed_channel_ids() {
        for channel_id in [
            "",
            "1234",
            "12345678901234567890",
            "12345678901234567a",
            "00000000000000000",
        ] {
            let dto = SendMessageDto {
                channel_id: channel_id.to_string(),
                ..text_dto("hi")
            };
            assert_bad_request(RelayRequest::from_dto(dto), INVALID_INPUT);
        }
    }

    #[test]
    fn rejects_embed_with_missing_fields() {
        let missing_title = SendMessageDto {
            embed_title: None,
            ..embed_dto()
        };
        let empty_description = SendMessageDto {
            embed_description: Some(String::new()),
            ..embed_dto()
        };
        let missing_footer = SendMessageDto {
            embed_footer: None,
            ..embed_dto()
        };

        for dto in [missing_title, empty_description, missing_footer] {
            assert_bad_request(RelayRequest::from_dto(dto), INVALID_INPUT);
        }
    }

    #[test]
    fn rejects_embed_with_invalid_colour() {
        let dto = SendMessageDto {
            embed_color: Some("blue".to_string()),
            ..embed_dto()
        };

        assert_bad_request(RelayRequest::from_dto(dto), INVALID_INPUT);
    }

    #[test]
    fn rejects_empty_plain_message() {
        assert_bad_request(RelayRequest::from_dto(text_dto("")), INVALID_CONTENT);

        let dto = SendMessageDto {
            message_content: None,
            ..text_dto("")
        };
        assert_bad_request(RelayRequest::from_dto(dto), INVALID_CONTENT);
    }

    #[test]
    fn embed_message_carries_footer() {
        let request = RelayRequest::from_dto(embed_dto()).unwrap();
        let message = serde_json::to_value(request.to_message()).unwrap();
        let embed = &message["embeds"][0];

        assert_eq!(embed["title"], "Nice Title");
        assert_eq!(embed["color"], 0xFF0000);
        assert_eq!(embed["footer"]["text"], "Optional footer");
    }

    #[tokio::test]
    async fn unknown_channel_becomes_not_found() {
        let err = AppError::from(create_test_http_error(404, 10003, "Unknown Channel").await);

        match relay_error(err, ChannelId::new(1)) {
            AppError::NotFound(msg) => assert_eq!(msg, "Channel not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_access_stays_internal() {
        let err = AppError::from(create_test_http_error(403, 50001, "Missing Access").await);

        let response = relay_error(err, ChannelId::new(1)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
