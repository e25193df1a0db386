//! Owner-only commands: log, restart, announce, a.

use crate::{
    error::{command::CommandError, AppError},
    service::log_channel::LogSink,
    util::parse::split_first_arg,
};

use super::Invocation;

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Toggles log channel reporting.
pub async fn log(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let state = invocation.state;
    state.owner.require(invocation.author_id(), "toggle logs")?;

    let enabled = state.log.toggle();
    tracing::info!("Log channel reporting {}", on_off(enabled));

    invocation
        .reply(format!("🛠️ Log channel reporting is now **{}**.", on_off(enabled)))
        .await
}

/// Replies, reports, and signals the process to shut down.
///
/// The process supervisor is expected to start the bot again.
pub async fn restart(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let state = invocation.state;
    state.owner.require(invocation.author_id(), "restart the bot")?;

    invocation.reply("♻️ Restarting the bot...").await?;
    state
        .log
        .log(&format!(
            "[RESTART] Requested by {}",
            invocation.message.author.name
        ))
        .await;

    state.shutdown.notify_one();

    Ok(())
}

/// Toggles YouTube upload announcements.
pub async fn announce(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let state = invocation.state;
    state
        .owner
        .require(invocation.author_id(), "toggle announcements")?;

    let (enabled, last_id) = {
        let mut gate = state.gate.write().await;
        (gate.toggle(), gate.last_announced_id().map(str::to_string))
    };

    state
        .log
        .log(&format!(
            "[ANNOUNCE] YouTube announcements {} by {} (last video: {})",
            on_off(enabled),
            invocation.message.author.name,
            last_id.as_deref().unwrap_or("none")
        ))
        .await;

    invocation
        .reply(format!(
            "📢 YouTube announcements are now **{}**.",
            on_off(enabled)
        ))
        .await
}

/// Enables or disables a registered command.
pub async fn toggle_command(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let state = invocation.state;
    state
        .owner
        .require(invocation.author_id(), "toggle commands")?;

    let Some((name, _)) = split_first_arg(invocation.args) else {
        return Err(CommandError::MissingArgument(invocation.usage("a").await).into());
    };
    let name = name
        .trim_start_matches(state.config.command_prefix.as_str())
        .to_lowercase();

    let enabled = state
        .registry
        .write()
        .await
        .toggle(&name, invocation.author_id())?;

    state
        .log
        .log(&format!("[TOGGLE] Command `{}` {}", name, on_off(enabled)))
        .await;

    let reply = if enabled {
        format!("✅ Command `{}` is now enabled.", name)
    } else {
        format!("🚫 Command `{}` is now disabled.", name)
    };
    invocation.reply(reply).await
}
