//! Chat command dispatch.
//!
//! Every guild or DM message passes through here. Messages from bots and messages
//! without the command prefix are dropped; the rest are resolved against the command
//! registry and executed. Command failures are answered in the invoking channel and
//! internal failures are additionally reported to the log channel.

use serenity::all::{Context, Message};

use crate::{
    bot::command::{self, Invocation},
    error::{command::CommandError, AppError},
    service::{command_registry::CommandRegistry, log_channel::LogSink},
    state::BotState,
    util::parse::parse_command,
};

/// What dispatch does with a parsed command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Name is not registered; the message is ignored.
    Ignore,
    /// Command is registered but switched off.
    Disabled,
    Run,
}

/// Resolves a command name against the registry.
pub fn resolve(registry: &CommandRegistry, name: &str) -> Dispatch {
    match registry.is_enabled(name) {
        None => Dispatch::Ignore,
        Some(false) => Dispatch::Disabled,
        Some(true) => Dispatch::Run,
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some((name, args)) = parse_command(&message.content, &state.config.command_prefix) else {
        return;
    };
    let name = name.to_lowercase();

    let dispatch = resolve(&*state.registry.read().await, &name);
    match dispatch {
        Dispatch::Ignore => {
            tracing::debug!("Ignoring unknown command `{}` from {}", name, message.author.name);
            return;
        }
        Dispatch::Disabled => {
            reply_error(&ctx, &message, &CommandError::Disabled(name).into()).await;
            return;
        }
        Dispatch::Run => {}
    }

    tracing::debug!("{} invoked `{}` with args {:?}", message.author.name, name, args);

    let invocation = Invocation {
        ctx: &ctx,
        message: &message,
        state,
        args,
    };

    if let Err(e) = command::execute(&name, &invocation).await {
        if e.is_system_failure() {
            tracing::error!("Command `{}` failed: {}", name, e);
            state
                .log
                .log(&format!(
                    "[COMMAND ERROR] `{}` invoked by {}: {}",
                    name, message.author.name, e
                ))
                .await;
        } else {
            tracing::debug!("Command `{}` rejected: {}", name, e);
        }

        reply_error(&ctx, &message, &e).await;
    }
}

async fn reply_error(ctx: &Context, message: &Message, err: &AppError) {
    if let Err(e) = message.channel_id.say(&ctx.http, err.reply_text()).await {
        tracing::warn!(
            "Failed to send error reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}
