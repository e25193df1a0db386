//! General commands: help, channel, stats.

use std::{collections::BTreeMap, time::Duration};

use serenity::all::{CreateEmbed, CreateEmbedFooter, Mentionable, UserId};

use crate::{
    error::AppError,
    model::command::{CommandCategory, CommandDescriptor},
    util::uptime::format_uptime,
};

use super::Invocation;

const EMBED_COLOR: u32 = 0x2ecc71;

/// Order of the help sections.
const HELP_ORDER: [CommandCategory; 3] = [
    CommandCategory::Hypixel,
    CommandCategory::General,
    CommandCategory::Admin,
];

/// Help embed listing commands grouped by category.
///
/// Sections follow [`HELP_ORDER`]; categories without listed commands are left out.
pub fn help_embed(
    grouped: &BTreeMap<CommandCategory, Vec<CommandDescriptor>>,
    prefix: &str,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("📖 Kereviz Bot Commands")
        .color(EMBED_COLOR)
        .footer(CreateEmbedFooter::new("Kereviz Bot 💚"));

    for category in HELP_ORDER {
        let Some(commands) = grouped.get(&category).filter(|c| !c.is_empty()) else {
            continue;
        };

        let lines = commands
            .iter()
            .map(|command| format!("`{}{}` - {}", prefix, command.name, command.help_text))
            .collect::<Vec<_>>()
            .join("\n");

        embed = embed.field(category.heading(), lines, false);
    }

    embed
}

pub async fn help(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let grouped = invocation.state.registry.read().await.list_by_category();
    let embed = help_embed(&grouped, &invocation.state.config.command_prefix);

    invocation.reply_embed(embed).await
}

pub fn channel_embed(youtube_channel_url: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("📺 Kereviz on YouTube")
        .url(youtube_channel_url)
        .description(format!(
            "Subscribe and turn on notifications so you never miss an upload!\n{}",
            youtube_channel_url
        ))
        .color(EMBED_COLOR)
}

pub async fn channel(invocation: &Invocation<'_>) -> Result<(), AppError> {
    invocation
        .reply_embed(channel_embed(&invocation.state.config.youtube_channel_url))
        .await
}

/// Figures shown by `!stats`.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub developer_id: u64,
    pub uptime_secs: u64,
    /// Gateway heartbeat latency; unknown until the first heartbeat is acknowledged.
    pub latency: Option<Duration>,
    pub guild_count: usize,
    pub user_count: u64,
    pub command_count: usize,
}

pub fn stats_embed(stats: &StatsSnapshot) -> CreateEmbed {
    let latency = stats
        .latency
        .map(|latency| format!("{} ms", latency.as_millis()))
        .unwrap_or_else(|| "N/A".to_string());

    CreateEmbed::new()
        .title("📊 Bot Statistics")
        .color(EMBED_COLOR)
        .field(
            "👨‍💻 Developer",
            UserId::new(stats.developer_id).mention().to_string(),
            true,
        )
        .field("⏱️ Uptime", format_uptime(stats.uptime_secs), true)
        .field("📡 Latency", latency, true)
        .field("🌐 Servers", stats.guild_count.to_string(), true)
        .field("👥 Users", stats.user_count.to_string(), true)
        .field("🧩 Commands", stats.command_count.to_string(), true)
        .field("📦 Version", env!("CARGO_PKG_VERSION"), true)
}

pub async fn stats(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let ctx = invocation.ctx;
    let state = invocation.state;

    let latency = match state.shard_manager.get() {
        Some(manager) => manager
            .runners
            .lock()
            .await
            .get(&ctx.shard_id)
            .and_then(|runner| runner.latency),
        None => None,
    };

    let guild_ids = ctx.cache.guilds();
    let user_count = guild_ids
        .iter()
        .filter_map(|guild_id| ctx.cache.guild(*guild_id).map(|guild| guild.member_count))
        .sum();

    let snapshot = StatsSnapshot {
        developer_id: state.owner.owner_id(),
        uptime_secs: state.uptime_secs(),
        latency,
        guild_count: guild_ids.len(),
        user_count,
        command_count: state.registry.read().await.command_count(),
    };

    invocation.reply_embed(stats_embed(&snapshot)).await
}
