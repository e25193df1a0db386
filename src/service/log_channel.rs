//! Discord log channel reporting.
//!
//! This module provides the `LogChannel`, the bot's observability sink. Every message
//! is emitted as a tracing event and, while channel logging is switched on, mirrored
//! to the configured Discord log channel. Reporting is best-effort: delivery failures
//! are traced and swallowed so a broken log channel never interrupts the caller.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serenity::{all::ChannelId, async_trait, http::Http};

const LOG_PREFIX: &str = "🛠️";

/// Best-effort sink for operational reports.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Reports a message. Never fails and never panics.
    async fn log(&self, message: &str);
}

/// Log sink writing to a Discord channel.
///
/// Cheap to clone; clones share the enabled switch.
#[derive(Clone)]
pub struct LogChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
    enabled: Arc<AtomicBool>,
}

impl LogChannel {
    /// Creates a log channel sink, enabled.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used to post log messages
    /// - `channel_id` - Discord channel receiving the log messages
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Flips channel logging and returns the new state.
    ///
    /// Tracing output is unaffected; only the Discord mirror is switched.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::SeqCst)
    }
}

#[async_trait]
impl LogSink for LogChannel {
    async fn log(&self, message: &str) {
        tracing::info!("{}", message);

        if !self.is_enabled() {
            return;
        }

        let content = format!("{} {}", LOG_PREFIX, message);
        if let Err(e) = self.channel_id.say(&self.http, content).await {
            tracing::warn!(
                "Failed to post log message to channel {}: {}",
                self.channel_id,
                e
            );
        }
    }
}
