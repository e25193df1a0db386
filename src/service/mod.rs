//! Business logic shared by the command handlers and the feed poller.
//!
//! - **Command registry** (`command_registry`) - Known commands, categories, and toggles
//! - **Announcement gate** (`announcement`) - Manual switch and last announced upload
//! - **Feed** (`feed`) - YouTube upload feed client and Atom parsing
//! - **Publisher** (`publisher`) - Announcement channel posting and history reads
//! - **Seed** (`seed`) - Startup recovery of the last announced upload
//! - **Log channel** (`log_channel`) - Best-effort Discord log sink
//! - **Owner** (`owner`) - Owner authorization check
//! - **Hypixel** (`hypixel`) - Mojang & Hypixel player lookups
//! - **Welcome** (`welcome`) - Member welcome embeds

pub mod announcement;
pub mod command_registry;
pub mod feed;
pub mod hypixel;
pub mod log_channel;
pub mod owner;
pub mod publisher;
pub mod seed;
pub mod welcome;

#[cfg(test)]
mod test;
