//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type that wraps the domain-specific errors raised by configuration loading,
//! command handling, and the YouTube feed. Command handlers and the feed poller catch
//! errors at their own boundary; nothing in here is meant to bring the process down
//! once startup has completed.

pub mod command;
pub mod config;
pub mod feed;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, feed::FeedError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion. Domain-specific errors like `CommandError`
/// provide their own user-facing messages, while the remaining variants are treated
/// as internal failures that are logged and answered with a generic reply.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only raised before the bot connects; aborts startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command rejected because of authorization, registry misuse, or bad arguments.
    ///
    /// Surfaced to the invoking user as a rejection message, not logged as a failure.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// YouTube feed could not be fetched or parsed.
    ///
    /// Recoverable; the poller reports it and waits for the next interval.
    #[error(transparent)]
    FeedErr(#[from] FeedError),

    /// Announcement could not be delivered to the announcement channel.
    ///
    /// Reported and not retried; the claimed video id stays remembered.
    #[error("Failed to publish announcement: {0}")]
    PublishErr(String),

    /// HTTP client request error from reqwest.
    ///
    /// Raised by the Mojang & Hypixel lookups and client construction.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    ///
    /// Raised when the feed poller job cannot be registered, started, or shut down.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Generic reply sent to the invoker when a command fails for an internal reason.
pub const GENERIC_COMMAND_FAILURE: &str = "❌ An error occurred while processing your command.";

impl AppError {
    /// Returns the reply text shown to the user who invoked a failing command.
    ///
    /// Command rejections carry their own message; every other error is reported
    /// with a generic message so internal details are not leaked into the channel.
    ///
    /// # Returns
    /// - `String` - Rejection or generic failure message
    pub fn reply_text(&self) -> String {
        match self {
            Self::CommandErr(err) => err.user_message(),
            Self::NotFound(msg) => format!("❌ {}", msg),
            _ => GENERIC_COMMAND_FAILURE.to_string(),
        }
    }

    /// Whether the error should be reported to the log channel as a system failure.
    ///
    /// Authorization and registry misuse are user errors and are only answered in
    /// the invoking channel.
    pub fn is_system_failure(&self) -> bool {
        !matches!(self, Self::CommandErr(_) | Self::NotFound(_))
    }
}
