//! Bot state shared by the event handler, commands, and the feed poller.
//!
//! `BotState` is created once in `main` and cloned into the Discord event handler and
//! the feed poller. Every field is cheap to clone; mutable state sits behind
//! `tokio::sync::RwLock` or atomics so the poller and command handlers observe the
//! same announcement gate and command toggles.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use serenity::{gateway::ShardManager, http::Http};
use tokio::sync::{Notify, RwLock};

use crate::{
    config::Config,
    service::{
        announcement::AnnouncementGate, command_registry::CommandRegistry,
        log_channel::LogChannel, owner::OwnerGuard,
    },
};

#[derive(Clone)]
pub struct BotState {
    pub config: Arc<Config>,

    /// Registered commands and their enabled flags.
    pub registry: Arc<RwLock<CommandRegistry>>,

    /// Announcement switch and last announced upload, shared with the feed poller.
    pub gate: Arc<RwLock<AnnouncementGate>>,

    /// Discord log channel sink, switched by `!log`.
    pub log: LogChannel,

    pub owner: OwnerGuard,

    /// HTTP client for the YouTube feed and the Mojang & Hypixel APIs.
    pub http_client: reqwest::Client,

    /// Discord HTTP client used outside of gateway events.
    pub discord_http: Arc<Http>,

    pub started_at: DateTime<Utc>,

    /// Gateway shard manager, set once the client has been built.
    ///
    /// Used for gateway latency in `!stats`.
    pub shard_manager: Arc<OnceLock<Arc<ShardManager>>>,

    /// Notified by `!restart` to shut the process down gracefully.
    pub shutdown: Arc<Notify>,
}

impl BotState {
    /// Creates the bot state.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    /// - `registry` - Command registry populated from the command catalog
    /// - `http_client` - Shared HTTP client for external APIs
    /// - `discord_http` - Discord HTTP client for the log channel and announcements
    ///
    /// # Returns
    /// - `BotState` - State with announcements disabled and channel logging on
    pub fn new(
        config: Config,
        registry: CommandRegistry,
        http_client: reqwest::Client,
        discord_http: Arc<Http>,
    ) -> Self {
        let log = LogChannel::new(discord_http.clone(), config.log_channel_id);
        let owner = OwnerGuard::new(config.owner_id);

        Self {
            config: Arc::new(config),
            registry: Arc::new(RwLock::new(registry)),
            gate: Arc::new(RwLock::new(AnnouncementGate::new())),
            log,
            owner,
            http_client,
            discord_http,
            started_at: Utc::now(),
            shard_manager: Arc::new(OnceLock::new()),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_secs(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
