//! Test factory for creating Serenity Message and User objects.

use serenity::all::{Message, User};

fn user_json(user_id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": format!("user{}", user_id),
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}

/// Creates a test Serenity User.
///
/// The username is derived from the id (`user<id>`) and the user has no avatar,
/// so `User::face()` resolves to Discord's default avatar.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64) -> User {
    serde_json::from_value(user_json(user_id))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity Message posted in a guild text channel.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake); higher ids are newer
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - User ID of the author
/// - `content` - Message text
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(2, 10, 1, "https://www.youtube.com/watch?v=ABC123");
/// assert_eq!(message.content, "https://www.youtube.com/watch?v=ABC123");
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
