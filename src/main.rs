mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    bot, config::Config, error::AppError, router, scheduler, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(config.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let mut job_scheduler =
        scheduler::start_scheduler(&config, discord_http.clone(), http_client).await?;

    let app = router::router(AppState::new(discord_http, config.api_key.clone()));
    let listener = tokio::net::TcpListener::bind(&config.api_addr).await?;

    tracing::info!("API listening on {}", config.api_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");

    if let Err(e) = job_scheduler.shutdown().await {
        tracing::error!("Failed to shut down scheduler: {}", e);
    }
    shard_manager.shutdown_all().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
