use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        embed::SendMessageDto,
    },
    server::{
        error::AppError,
        middleware::auth::ApiKeyGuard,
        service::relay::{RelayRequest, RelayService, INVALID_INPUT},
        state::AppState,
    },
};

pub static EMBED_TAG: &str = "embed";

/// Send a message or embed to a Discord channel
#[utoipa::path(
    post,
    path = "/embed/send-message",
    tag = EMBED_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent successfully", body = SuccessDto),
        (status = 400, description = "Invalid input data", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Error sending message", body = ErrorDto)
    ),
    security(
        (),
        ("api_key" = [])
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SendMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    ApiKeyGuard::new(state.api_key.as_deref(), &headers).require()?;

    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected relay payload: {}", rejection.body_text());
        AppError::BadRequest(INVALID_INPUT.to_string())
    })?;

    let request = RelayRequest::from_dto(payload)?;

    RelayService::new(&state.discord_http)
        .send(&request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            message: "Message sent successfully".to_string(),
        }),
    ))
}
