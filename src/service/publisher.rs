//! Announcement channel access.
//!
//! The announcement channel is both where new uploads are announced and where the
//! startup seed step looks for the last announcement. `ChannelAnnouncer` implements
//! both sides against the Discord API.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage, GetMessages, Message},
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::feed::FeedItem};

/// Publishes upload announcements.
#[async_trait]
pub trait AnnouncementPublisher: Send + Sync {
    async fn publish(&self, item: &FeedItem) -> Result<(), AppError>;
}

/// Reads recent messages of the announcement channel.
#[async_trait]
pub trait ChannelHistory: Send + Sync {
    /// Returns up to `limit` most recent messages, newest first.
    async fn recent_messages(&self, limit: u8) -> Result<Vec<Message>, AppError>;
}

/// Text of an upload announcement.
pub fn announcement_content(item: &FeedItem) -> String {
    format!(
        "@everyone 📢 A new video has just been uploaded!\n{}",
        item.link
    )
}

/// Discord implementation of the announcement channel.
#[derive(Clone)]
pub struct ChannelAnnouncer {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelAnnouncer {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl AnnouncementPublisher for ChannelAnnouncer {
    async fn publish(&self, item: &FeedItem) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .content(announcement_content(item))
            .allowed_mentions(CreateAllowedMentions::new().everyone(true));

        self.channel_id
            .send_message(&self.http, message)
            .await
            .map_err(|e| AppError::PublishErr(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ChannelHistory for ChannelAnnouncer {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<Message>, AppError> {
        let messages = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages)
    }
}
