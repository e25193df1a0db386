use thiserror::Error;

/// Failures while fetching or reading the YouTube upload feed.
///
/// All variants are recoverable: the poller reports them to the log channel and
/// tries again on the next interval without touching the announcement state.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network failure or non-success HTTP status while requesting the feed.
    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Response body is not well-formed XML.
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] xmltree::ParseError),

    /// Response is XML but not an Atom feed document.
    #[error("Unexpected feed document: root element is <{0}>")]
    UnexpectedRoot(String),

    /// Feed contains no entries.
    #[error("Feed contains no entries")]
    Empty,
}
