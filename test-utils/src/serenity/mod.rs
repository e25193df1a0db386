//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return. Only the fields the bot reads are customizable;
//! everything else gets a sensible default.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_user` - Create Serenity User objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod message;
pub mod role;

// Re-export commonly used functions for convenience
pub use message::{create_test_message, create_test_user};
pub use role::create_test_role;
