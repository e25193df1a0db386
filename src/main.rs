mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    bot::command::build_registry, config::Config, error::AppError,
    scheduler::youtube_feed, service::owner::OwnerGuard, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let discord_http = startup::setup_discord_http(&config);
    let registry = build_registry(OwnerGuard::new(config.owner_id), &config.command_prefix)?;
    let poll_interval = config.poll_interval;

    let state = BotState::new(config, registry, http_client, discord_http);

    tracing::info!("Starting Kereviz bot");

    // Initialize Discord bot and start it in a separate task
    let bot_client = bot::start::init_bot(&state).await?;
    let shard_manager = bot_client.shard_manager.clone();
    let mut bot_task = tokio::spawn(bot::start::start_bot(bot_client));

    // Seed before the first cycle so a restart never re-announces the last upload
    let poller = Arc::new(startup::seed_feed_poller(&state).await?);
    let mut scheduler = youtube_feed::start_scheduler(poller, poll_interval).await?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        },
        _ = state.shutdown.notified() => {
            tracing::info!("Restart requested, shutting down");
        }
        result = &mut bot_task => match result {
            Ok(Ok(())) => tracing::warn!("Discord bot stopped"),
            Ok(Err(e)) => tracing::error!("Discord bot error: {}", e),
            Err(e) => tracing::error!("Discord bot task failed: {}", e),
        },
    }

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop YouTube feed scheduler: {}", e);
    }
    shard_manager.shutdown_all().await;

    tracing::info!("Shutdown complete");

    Ok(())
}
