//! Member join handling.
//!
//! Greets new members in the welcome channel and by direct message. Both messages
//! are best-effort; failures are reported to the log channel and never retried.

use serenity::all::{ChannelId, Context, CreateMessage, Member, Mentionable};

use crate::{
    service::{
        log_channel::LogSink,
        welcome::{welcome_channel_embed, welcome_dm_embed},
    },
    state::BotState,
    util::discord::is_forbidden,
};

/// Handles a member joining a guild.
///
/// # Arguments
/// - `state` - Bot state with the welcome channel and log channel
/// - `ctx` - Discord context for the cache and HTTP client
/// - `member` - Member who joined
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, member: Member) {
    let user = &member.user;
    let prefix = &state.config.command_prefix;
    let avatar_url = user.face();
    let guild_name = member
        .guild_id
        .name(&ctx.cache)
        .unwrap_or_else(|| "the server".to_string());

    tracing::info!("{} joined guild {}", user.name, member.guild_id);

    let welcome_channel = ChannelId::new(state.config.welcome_channel_id);
    let embed = welcome_channel_embed(
        &user.name,
        &user.mention().to_string(),
        &guild_name,
        &avatar_url,
        prefix,
    );
    if let Err(e) = welcome_channel
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        state
            .log
            .log(&format!(
                "[WELCOME ERROR] Could not greet {} in the welcome channel: {}",
                user.name, e
            ))
            .await;
    }

    let dm = CreateMessage::new().embed(welcome_dm_embed(
        &state.config.youtube_channel_url,
        &avatar_url,
        prefix,
    ));
    match user.direct_message(&ctx, dm).await {
        Ok(_) => tracing::debug!("Sent welcome DM to {}", user.name),
        Err(e) if is_forbidden(&e) => {
            state
                .log
                .log(&format!("[DM] {} has DMs closed.", user.name))
                .await
        }
        Err(e) => {
            state
                .log
                .log(&format!("[DM ERROR] Could not DM {}: {}", user.name, e))
                .await
        }
    }
}
