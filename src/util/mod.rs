pub mod discord;
pub mod parse;
pub mod uptime;
pub mod video_id;
