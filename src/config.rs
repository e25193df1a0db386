use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const YOUTUBE_FEED_URL: &str = "https://www.youtube.com/feeds/videos.xml";
const DEFAULT_YOUTUBE_CHANNEL_URL: &str = "https://www.youtube.com/@kerevizYT";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_SEED_SCAN_LIMIT: u8 = 20;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1200;

pub struct Config {
    pub discord_token: String,
    pub hypixel_api_key: Option<String>,

    pub youtube_channel_id: String,
    pub youtube_feed_url: String,
    pub youtube_channel_url: String,

    pub announce_channel_id: u64,
    pub log_channel_id: u64,
    pub welcome_channel_id: u64,
    pub owner_id: u64,

    pub command_prefix: String,
    pub seed_scan_limit: u8,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            hypixel_api_key: optional("HYPIXEL_API_KEY"),
            youtube_channel_id: required("YOUTUBE_CHANNEL_ID")?,
            youtube_feed_url: YOUTUBE_FEED_URL.to_string(),
            youtube_channel_url: optional("YOUTUBE_CHANNEL_URL")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_CHANNEL_URL.to_string()),
            announce_channel_id: parse_id("DISCORD_CHANNEL_ID", required("DISCORD_CHANNEL_ID")?)?,
            log_channel_id: parse_id("LOG_CHANNEL_ID", required("LOG_CHANNEL_ID")?)?,
            welcome_channel_id: parse_id("WELCOME_CHANNEL_ID", required("WELCOME_CHANNEL_ID")?)?,
            owner_id: parse_id("OWNER_ID", required("OWNER_ID")?)?,
            command_prefix: optional("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            seed_scan_limit: match optional("SEED_SCAN_LIMIT") {
                Some(value) => parse_seed_scan_limit(value)?,
                None => DEFAULT_SEED_SCAN_LIMIT,
            },
            poll_interval: match optional("POLL_INTERVAL_SECS") {
                Some(value) => parse_poll_interval(value)?,
                None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn invalid(name: &str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: reason.into(),
    }
}

/// Parses a Discord snowflake id; zero is rejected since serenity ids are non-zero.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid(name, value, "id must be non-zero")),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(name, value, e.to_string())),
    }
}

/// Discord returns at most 100 messages per history request.
fn parse_seed_scan_limit(value: String) -> Result<u8, ConfigError> {
    match value.trim().parse::<u8>() {
        Ok(limit) if (1..=100).contains(&limit) => Ok(limit),
        Ok(_) => Err(invalid("SEED_SCAN_LIMIT", value, "must be between 1 and 100")),
        Err(e) => Err(invalid("SEED_SCAN_LIMIT", value, e.to_string())),
    }
}

fn parse_poll_interval(value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("POLL_INTERVAL_SECS", value, "must be positive")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(invalid("POLL_INTERVAL_SECS", value, e.to_string())),
    }
}
