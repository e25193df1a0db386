//! YouTube feed item models.

use crate::util::video_id::video_id_from_link;

/// One upload read from the channel's Atom feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Short identifier extracted from the entry link.
    pub video_id: String,
    /// Link as published in the feed, used verbatim in the announcement.
    pub link: String,
}

impl FeedItem {
    /// Builds a feed item from an entry link, extracting its video id.
    pub fn from_link(link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            video_id: video_id_from_link(&link),
            link,
        }
    }
}

/// Result of a single feed poller cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Announcements are switched off; nothing was fetched.
    Disabled,
    /// Feed could not be fetched or held no entries.
    FetchFailed,
    /// Newest upload was already announced.
    Skipped(String),
    /// Newest upload was announced.
    Announced(String),
    /// Newest upload is new but the announcement could not be sent.
    PublishFailed(String),
}
