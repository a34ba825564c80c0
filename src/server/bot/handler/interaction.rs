//! Interaction handler for button presses and slash commands.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        command::CommandService,
        rules::{RulesService, ACCEPT_RULES_ID, ERROR_REPLY, GRANTED_REPLY},
    },
};

/// Dispatches an interaction to the matching feature.
pub async fn handle_interaction(config: &Config, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if let Err(e) = CommandService::new(&ctx.http).respond(&command).await {
                tracing::error!(
                    "Failed to respond to /{} from {}: {}",
                    command.data.name,
                    command.user.name,
                    e
                );
            }
        }
        Interaction::Component(component) if component.data.custom_id == ACCEPT_RULES_ID => {
            handle_accept_rules(config, &ctx, &component).await;
        }
        _ => {}
    }
}

/// Grants the rules role and replies ephemerally with the outcome.
async fn handle_accept_rules(config: &Config, ctx: &Context, component: &ComponentInteraction) {
    let reply = match accept_rules(config, ctx, component).await {
        Ok(()) => GRANTED_REPLY,
        Err(e) => {
            tracing::error!(
                "Failed to assign rules role to {}: {}",
                component.user.name,
                e
            );
            ERROR_REPLY
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply)
            .ephemeral(true),
    );

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to rules button press from {}: {}",
            component.user.name,
            e
        );
    }
}

async fn accept_rules(
    config: &Config,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(role_id) = config.rules_role_id else {
        return Err(AppError::InternalError(
            "RULES_ROLE_ID is not configured".to_string(),
        ));
    };
    let Some(member) = component.member.as_ref() else {
        return Err(AppError::BadRequest(
            "Rules button pressed outside of a guild".to_string(),
        ));
    };

    RulesService::new(&ctx.http)
        .accept_rules(member, role_id)
        .await?;

    Ok(())
}
