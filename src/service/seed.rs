//! Startup recovery of the last announced upload.
//!
//! The bot keeps no persistent state, so after a restart it looks back through the
//! announcement channel for the most recent message linking a video and treats that
//! video as already announced.

use serenity::all::Message;

use crate::util::video_id::video_id_from_message;

/// Finds the video id of the newest message linking a watch or shorts URL.
///
/// # Arguments
/// - `messages` - Channel messages, newest first
///
/// # Returns
/// - `Some(String)` - Video id linked by the first matching message
/// - `None` - No message links a video
pub fn last_announced_video_id(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .find_map(|message| video_id_from_message(&message.content))
}
