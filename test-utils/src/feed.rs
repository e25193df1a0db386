//! YouTube Atom feed fixtures.
//!
//! Builds documents shaped like `https://www.youtube.com/feeds/videos.xml?channel_id=…`,
//! including the `yt:` and `media:` namespaces YouTube adds, so parsers are tested
//! against the real structure rather than a minimal Atom skeleton.

/// One entry of a fixture feed.
#[derive(Debug, Clone)]
pub struct FeedEntryFixture {
    pub video_id: String,
    pub link: String,
}

impl FeedEntryFixture {
    /// Regular upload linked as `watch?v=<id>`.
    pub fn watch(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            link: format!("https://www.youtube.com/watch?v={}", video_id),
        }
    }

    /// Short linked as `/shorts/<id>`.
    pub fn shorts(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            link: format!("https://www.youtube.com/shorts/{}", video_id),
        }
    }
}

/// Renders a feed document with the given entries, in order.
pub fn youtube_feed_xml(entries: &[FeedEntryFixture]) -> String {
    let entries: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"
 <entry>
  <id>yt:video:{id}</id>
  <yt:videoId>{id}</yt:videoId>
  <yt:channelId>UCfixture</yt:channelId>
  <title>Upload {id}</title>
  <link rel="alternate" href="{link}"/>
  <author>
   <name>Kereviz</name>
   <uri>https://www.youtube.com/channel/UCfixture</uri>
  </author>
  <published>2024-01-01T00:00:00+00:00</published>
  <updated>2024-01-01T00:00:00+00:00</updated>
  <media:group>
   <media:title>Upload {id}</media:title>
   <media:thumbnail url="https://i.ytimg.com/vi/{id}/hqdefault.jpg" width="480" height="360"/>
  </media:group>
 </entry>"#,
                id = entry.video_id,
                link = entry.link,
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">
 <link rel="self" href="http://www.youtube.com/feeds/videos.xml?channel_id=UCfixture"/>
 <id>yt:channel:UCfixture</id>
 <yt:channelId>UCfixture</yt:channelId>
 <title>Kereviz</title>
 <link rel="alternate" href="https://www.youtube.com/channel/UCfixture"/>{entries}
</feed>"#
    )
}
