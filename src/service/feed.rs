//! YouTube upload feed client.
//!
//! Fetches a channel's public Atom feed and reads the entry links. YouTube lists
//! entries newest first, so the first entry is the latest upload.

use std::io::Cursor;

use serenity::async_trait;
use url::Url;
use xmltree::{Element, XMLNode};

use crate::{error::feed::FeedError, model::feed::FeedItem};

/// Source of the newest upload.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the feed and returns its newest item.
    ///
    /// # Returns
    /// - `Ok(FeedItem)` - Newest entry of the feed
    /// - `Err(FeedError::Empty)` - Feed fetched but has no entries
    /// - `Err(FeedError)` - Network or parse failure
    async fn latest(&self) -> Result<FeedItem, FeedError>;
}

/// HTTP client for one channel's `videos.xml` feed.
#[derive(Clone)]
pub struct YouTubeFeedClient {
    http_client: reqwest::Client,
    feed_url: Url,
}

impl YouTubeFeedClient {
    /// Creates a feed client for a channel.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `base_url` - Feed endpoint, e.g. `https://www.youtube.com/feeds/videos.xml`
    /// - `channel_id` - YouTube channel id, sent as the `channel_id` query parameter
    ///
    /// # Returns
    /// - `Ok(YouTubeFeedClient)` - Client with the feed URL built
    /// - `Err(url::ParseError)` - `base_url` is not a valid URL
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        channel_id: &str,
    ) -> Result<Self, url::ParseError> {
        let feed_url = Url::parse_with_params(base_url, &[("channel_id", channel_id)])?;

        Ok(Self {
            http_client,
            feed_url,
        })
    }

    #[cfg(test)]
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetches and parses every entry in the feed.
    pub async fn fetch(&self) -> Result<Vec<FeedItem>, FeedError> {
        let body = self
            .http_client
            .get(self.feed_url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_feed(&body)
    }
}

#[async_trait]
impl FeedSource for YouTubeFeedClient {
    async fn latest(&self) -> Result<FeedItem, FeedError> {
        self.fetch()
            .await?
            .into_iter()
            .next()
            .ok_or(FeedError::Empty)
    }
}

/// Parses an Atom feed document into feed items, in document order.
///
/// Entries without a usable link are skipped.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, FeedError> {
    let root = Element::parse(Cursor::new(xml.as_bytes()))?;
    if root.name != "feed" {
        return Err(FeedError::UnexpectedRoot(root.name));
    }

    Ok(child_elements(&root, "entry")
        .filter_map(entry_link)
        .map(FeedItem::from_link)
        .collect())
}

fn child_elements<'a>(parent: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    parent.children.iter().filter_map(move |node| match node {
        XMLNode::Element(el) if el.name == name => Some(el),
        _ => None,
    })
}

/// Picks the `alternate` link of an entry; a link without `rel` counts as alternate.
fn entry_link(entry: &Element) -> Option<String> {
    child_elements(entry, "link")
        .find(|link| {
            link.attributes
                .get("rel")
                .map_or(true, |rel| rel == "alternate")
        })
        .and_then(|link| link.attributes.get("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
