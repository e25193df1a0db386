//! Member welcome messages.
//!
//! Builds the embed posted in the welcome channel and the embed sent to the new
//! member by direct message when someone joins the guild.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

const EMBED_COLOR: u32 = 0x2ecc71;

/// Embed posted in the welcome channel.
///
/// # Arguments
/// - `member_name` - Username of the new member
/// - `member_mention` - Mention markup of the new member, e.g. `<@123>`
/// - `guild_name` - Name of the guild joined
/// - `avatar_url` - Avatar (or default avatar) URL of the new member
/// - `prefix` - Command prefix, shown in the help hint
pub fn welcome_channel_embed(
    member_name: &str,
    member_mention: &str,
    guild_name: &str,
    avatar_url: &str,
    prefix: &str,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("📥 Welcome {}!", member_name))
        .description(format!(
            "Hey {}, welcome to **{}**!\n\n\
             📸 Please send a screenshot showing you're subscribed to **Kereviz** on YouTube.\n\
             💬 Use `{}help` any time if you need assistance!",
            member_mention, guild_name, prefix
        ))
        .color(EMBED_COLOR)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new("Glad to have you here! | Kereviz Bot"))
}

/// Embed sent to the new member by direct message.
pub fn welcome_dm_embed(youtube_channel_url: &str, avatar_url: &str, prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("🌟 Welcome to Kereviz Community!")
        .description(format!(
            "Hey there!\n\n\
             📺 **Quick favor:** Make sure you're **subscribed** to \
             [Kereviz YouTube]({}) and then send a screenshot in the server so we \
             can verify you and give you the **Subscriber** role.\n\n\
             Need help? Just type `{}help` anywhere in the server or reply here!",
            youtube_channel_url, prefix
        ))
        .color(EMBED_COLOR)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new("Glad to have you on board! – Kereviz Bot"))
}
