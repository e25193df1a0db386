//! Discord bot integration.
//!
//! The bot listens for gateway events through a single `Handler` holding the shared
//! `BotState`. Chat commands arrive as regular messages and are dispatched through
//! the command registry; member joins trigger the welcome flow.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild cache used by `!stats`, `!ban`, and welcome messages
//! - `GUILD_MESSAGES` - Receive prefixed chat commands
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//! - `GUILD_MEMBERS` - Receive member joins for the welcome flow (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;
