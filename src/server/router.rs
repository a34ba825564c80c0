use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{embed, health},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MITPA Bot API",
        description = "Relay messages and embeds into the community Discord server"
    ),
    tags(
        (name = "embed", description = "Send messages and embeds to Discord channels"),
        (name = "health", description = "Liveness probe")
    ),
    modifiers(&ApiKeySecurity)
)]
struct ApiDoc;

/// Registers the optional bearer API key scheme referenced by protected routes.
struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "api_key",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
    }
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(embed::send_message))
        .routes(routes!(health::health))
}

/// Builds the API router with Swagger UI served at `/api-docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
