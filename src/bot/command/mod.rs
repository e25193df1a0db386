//! Chat commands.
//!
//! The catalog below is the single source of registered commands; the registry is
//! built from it at startup and `execute` routes a resolved name to its handler.
//!
//! - **General** (`general`) - help, channel, stats
//! - **Hypixel** (`hypixel`) - bedwars
//! - **Admin** (`admin`) - log, restart, announce, a
//! - **Moderation** (`moderation`) - ban

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

use crate::{
    error::{command::CommandError, AppError},
    model::command::{CommandCategory, RegisterCommandParam},
    service::{command_registry::CommandRegistry, owner::OwnerGuard},
    state::BotState,
};

pub mod admin;
pub mod general;
pub mod hypixel;
pub mod moderation;

/// Every command the bot registers at startup.
///
/// # Arguments
/// - `prefix` - Command prefix, used in usage strings
pub fn command_catalog(prefix: &str) -> Vec<RegisterCommandParam> {
    vec![
        RegisterCommandParam::new("help", CommandCategory::General, "Show all available commands."),
        RegisterCommandParam::new(
            "channel",
            CommandCategory::General,
            "Get the link to Kereviz's YouTube channel.",
        ),
        RegisterCommandParam::new("stats", CommandCategory::General, "Shows detailed bot statistics."),
        RegisterCommandParam::new(
            "bedwars",
            CommandCategory::Hypixel,
            "Displays BedWars statistics for a given player.",
        )
        .usage(&format!("{}bedwars <username>", prefix)),
        RegisterCommandParam::new("log", CommandCategory::Admin, "Toggle log channel reporting."),
        RegisterCommandParam::new("restart", CommandCategory::Admin, "Restart the bot."),
        RegisterCommandParam::new(
            "announce",
            CommandCategory::Admin,
            "Enable/disable YouTube upload announcements.",
        ),
        RegisterCommandParam::new("a", CommandCategory::Admin, "Enable/disable a command.")
            .usage(&format!("{}a <command>", prefix)),
        RegisterCommandParam::new("ban", CommandCategory::Admin, "Ban a member from the server.")
            .usage(&format!("{}ban <@user|id> [reason]", prefix)),
    ]
}

/// Builds the command registry from the catalog.
///
/// # Returns
/// - `Ok(CommandRegistry)` - Every catalog command registered and enabled
/// - `Err(CommandError::DuplicateCommand)` - Catalog names a command twice
pub fn build_registry(owner: OwnerGuard, prefix: &str) -> Result<CommandRegistry, CommandError> {
    let mut registry = CommandRegistry::new(owner);

    for param in command_catalog(prefix) {
        registry.register(param)?;
    }

    Ok(registry)
}

/// A single command invocation.
pub struct Invocation<'a> {
    pub ctx: &'a Context,
    pub message: &'a Message,
    pub state: &'a BotState,
    /// Argument text after the command name, trimmed.
    pub args: &'a str,
}

impl Invocation<'_> {
    pub fn author_id(&self) -> u64 {
        self.message.author.id.get()
    }

    /// Usage string of a registered command, falling back to the bare command.
    pub async fn usage(&self, name: &str) -> String {
        self.state
            .registry
            .read()
            .await
            .get(name)
            .and_then(|command| command.usage.clone())
            .unwrap_or_else(|| format!("{}{}", self.state.config.command_prefix, name))
    }

    pub async fn reply(&self, content: impl Into<String>) -> Result<(), AppError> {
        self.message
            .channel_id
            .say(&self.ctx.http, content.into())
            .await?;

        Ok(())
    }

    pub async fn reply_embed(&self, embed: CreateEmbed) -> Result<(), AppError> {
        self.message
            .channel_id
            .send_message(&self.ctx.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}

/// Runs a resolved command.
///
/// # Returns
/// - `Ok(())` - Command completed and replied
/// - `Err(AppError::CommandErr)` - Invocation rejected; reply with its user message
/// - `Err(AppError)` - Internal failure
pub async fn execute(name: &str, invocation: &Invocation<'_>) -> Result<(), AppError> {
    match name {
        "help" => general::help(invocation).await,
        "channel" => general::channel(invocation).await,
        "stats" => general::stats(invocation).await,
        "bedwars" => hypixel::bedwars(invocation).await,
        "log" => admin::log(invocation).await,
        "restart" => admin::restart(invocation).await,
        "announce" => admin::announce(invocation).await,
        "a" => admin::toggle_command(invocation).await,
        "ban" => moderation::ban(invocation).await,
        _ => Err(CommandError::UnknownCommand(name.to_string()).into()),
    }
}
