//! Hypixel commands.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{
    error::{command::CommandError, AppError},
    model::hypixel::{rank_color, score_bar, score_comment},
    service::hypixel::{BedwarsLookup, HypixelService},
    util::parse::split_first_arg,
};

use super::Invocation;

const HEAD_RENDER_URL: &str = "https://crafatar.com/avatars";

/// Whether `name` could be a Minecraft username: 1–16 letters, digits, or underscores.
pub fn is_valid_username(name: &str) -> bool {
    (1..=16).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// BedWars statistics embed.
pub fn bedwars_embed(lookup: &BedwarsLookup) -> CreateEmbed {
    let s = &lookup.summary;
    let score = s.pro_score();

    CreateEmbed::new()
        .title(format!("🛏️ BedWars Stats - [{}] {}", s.rank, s.display_name))
        .color(rank_color(&s.rank))
        .thumbnail(format!("{}/{}?overlay", HEAD_RENDER_URL, lookup.uuid))
        .field("⭐ Level", s.level.to_string(), true)
        .field("🏆 Wins", s.wins.to_string(), true)
        .field("💀 Losses", s.losses.to_string(), true)
        .field("📈 W/L", format!("{:.2}", s.wlr), true)
        .field("⚔️ Kills", s.kills.to_string(), true)
        .field("☠️ Deaths", s.deaths.to_string(), true)
        .field("📊 K/D", format!("{:.2}", s.kdr), true)
        .field("🔥 Final Kills", s.final_kills.to_string(), true)
        .field("🪦 Final Deaths", s.final_deaths.to_string(), true)
        .field("💥 FKDR", format!("{:.2}", s.fkdr), true)
        .field("🛏️ Beds Broken", s.beds_broken.to_string(), true)
        .field("🧱 Beds Lost", s.beds_lost.to_string(), true)
        .field("🧮 BBLR", format!("{:.2}", s.bblr), true)
        .field(
            format!("🎯 Pro Score: {}/100", score),
            format!("{}\n{}", score_bar(score), score_comment(score)),
            false,
        )
        .footer(CreateEmbedFooter::new("Data from Hypixel API"))
}

pub async fn bedwars(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let Some((username, _)) = split_first_arg(invocation.args) else {
        return Err(CommandError::MissingArgument(invocation.usage("bedwars").await).into());
    };
    if !is_valid_username(username) {
        return Err(CommandError::InvalidArgument(
            "That is not a valid Minecraft username.".to_string(),
        )
        .into());
    }

    let state = invocation.state;
    let service = HypixelService::new(&state.http_client, state.config.hypixel_api_key.as_deref());
    let lookup = service.bedwars(username).await?;

    invocation.reply_embed(bedwars_embed(&lookup)).await
}
