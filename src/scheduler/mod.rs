//! Scheduled background jobs.
//!
//! - **YouTube feed** (`youtube_feed`) - Polls the upload feed and announces new videos

pub mod youtube_feed;

#[cfg(test)]
mod test;
