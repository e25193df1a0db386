//! Kerevizbot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. The bot talks to two
//! external systems, Discord and the YouTube upload feed, and this crate offers
//! realistic stand-ins for the data both of them return.
//!
//! # Overview
//!
//! - **serenity**: factories that build Serenity model objects (`Message`, `User`,
//!   `Role`) by deserializing JSON, the same way Serenity reads Discord's API
//! - **feed**: Atom documents shaped like YouTube's `videos.xml` feed
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{feed::{youtube_feed_xml, FeedEntryFixture}, serenity::create_test_message};
//!
//! #[test]
//! fn seeds_from_history() {
//!     let history = vec![create_test_message(2, 10, 1, "https://www.youtube.com/watch?v=ABC123")];
//!     let xml = youtube_feed_xml(&[FeedEntryFixture::watch("ABC123")]);
//!     // Feed history and xml into the code under test...
//! }
//! ```

pub mod feed;
pub mod serenity;
