use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client and registers the shard manager on the bot state.
///
/// # Arguments
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(state: &BotState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(state.clone());

    let client = Client::builder(&state.config.discord_token, intents)
        .event_handler(handler)
        .await?;

    if state
        .shard_manager
        .set(client.shard_manager.clone())
        .is_err()
    {
        tracing::warn!("Shard manager was already registered; keeping the first one");
    }

    Ok(client)
}

/// Connects to the gateway and runs until the shards are shut down.
///
/// Should be spawned on its own task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
