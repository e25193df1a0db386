//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Sets the bot presence
//! advertising the help and channel commands and reports the connection.

use serenity::all::{ActivityData, Context, Ready};

use crate::{service::log_channel::LogSink, state::BotState};

/// Presence text advertising the main commands, e.g. `!help, !channel 💚`.
pub fn presence_text(prefix: &str) -> String {
    format!("{prefix}help, {prefix}channel 💚")
}

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Bot state, for the command prefix and log channel
/// - `ctx` - Discord context for setting the presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    ctx.set_activity(Some(ActivityData::playing(presence_text(
        &state.config.command_prefix,
    ))));

    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
    state
        .log
        .log(&format!("[READY] Logged in as {}", ready.user.tag()))
        .await;
}
