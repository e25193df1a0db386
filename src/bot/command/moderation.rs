//! Moderation commands.

use std::collections::HashMap;

use serenity::all::{
    CreateEmbed, CreateEmbedFooter, Mentionable, Role, RoleId, Timestamp, UserId,
};

use crate::{
    error::{command::CommandError, AppError},
    util::{
        discord::{absent_on_not_found, is_forbidden},
        parse::{parse_user_id, split_first_arg},
    },
};

use super::Invocation;

/// Discord rejects audit log reasons longer than this.
const MAX_REASON_CHARS: usize = 512;
const DEFAULT_REASON: &str = "No reason provided";

/// Position of the highest role among `member_roles`; 0 (`@everyone`) when none are known.
pub fn top_role_position(roles: &HashMap<RoleId, Role>, member_roles: &[RoleId]) -> u16 {
    member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

/// Whether the invoker may moderate a member with the given top role.
///
/// The guild owner outranks everyone; otherwise the invoker's top role must be
/// strictly higher.
pub fn outranks(invoker_top: u16, target_top: u16, invoker_is_guild_owner: bool) -> bool {
    invoker_is_guild_owner || invoker_top > target_top
}

/// Ban reason as sent to Discord: trimmed, defaulted, and cut to the audit log limit.
pub fn ban_reason(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_REASON.to_string();
    }
    raw.chars().take(MAX_REASON_CHARS).collect()
}

pub fn ban_embed(target: UserId, moderator: UserId, reason: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔨 Member Banned")
        .color(0xe74c3c)
        .field("User", target.mention().to_string(), true)
        .field("Moderator", moderator.mention().to_string(), true)
        .field("Reason", reason, false)
        .footer(CreateEmbedFooter::new("Kereviz Bot Moderation"))
        .timestamp(Timestamp::now())
}

/// Bans a member by mention or id.
pub async fn ban(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let ctx = invocation.ctx;
    let message = invocation.message;
    let guild_id = message.guild_id.ok_or(CommandError::GuildOnly)?;

    let Some((target_arg, reason)) = split_first_arg(invocation.args) else {
        return Err(CommandError::MissingArgument(invocation.usage("ban").await).into());
    };
    let target_id = parse_user_id(target_arg).ok_or_else(|| {
        CommandError::InvalidArgument("Please mention a user or give a user ID.".to_string())
    })?;
    let target_id = UserId::new(target_id);
    if target_id == message.author.id {
        return Err(CommandError::InvalidArgument("You cannot ban yourself.".to_string()).into());
    }

    let invoker = guild_id.member(ctx, message.author.id).await?;
    // Users who already left can still be banned by id; any other lookup failure aborts
    let target = absent_on_not_found(guild_id.member(ctx, target_id).await)?;

    let (can_ban, invoker_top, target_top, is_guild_owner) = {
        let guild = guild_id.to_guild_cached(&ctx.cache).ok_or_else(|| {
            AppError::NotFound("Server information is not available yet.".to_string())
        })?;

        (
            guild.member_permissions(&invoker).ban_members(),
            top_role_position(&guild.roles, &invoker.roles),
            target
                .as_ref()
                .map(|target| top_role_position(&guild.roles, &target.roles)),
            guild.owner_id == invoker.user.id,
        )
    };

    if !can_ban {
        return Err(CommandError::MissingPermission("BAN_MEMBERS".to_string()).into());
    }
    if let Some(target_top) = target_top {
        if !outranks(invoker_top, target_top, is_guild_owner) {
            return Err(CommandError::InvalidArgument(
                "You cannot ban a member with an equal or higher role.".to_string(),
            )
            .into());
        }
    }

    let reason = ban_reason(reason);
    if let Err(e) = guild_id
        .ban_with_reason(&ctx.http, target_id, 0, &reason)
        .await
    {
        if is_forbidden(&e) {
            return Err(CommandError::Unavailable(
                "I don't have permission to ban that member.".to_string(),
            )
            .into());
        }
        return Err(e.into());
    }

    tracing::info!(
        "{} banned {} from guild {}: {}",
        message.author.name,
        target_id,
        guild_id,
        reason
    );

    invocation
        .reply_embed(ban_embed(target_id, message.author.id, &reason))
        .await
}
