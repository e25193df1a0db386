//! Domain models shared by the command handlers, services, and the feed poller.

pub mod command;
pub mod feed;
pub mod hypixel;
