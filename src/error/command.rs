use thiserror::Error;

/// Errors raised while handling a chat command.
///
/// These are rejections of the invocation itself (who invoked it, what it named, or
/// how its arguments were written) rather than system failures. Each variant maps to
/// the reply shown to the invoking user via [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Invoker is not the configured bot owner.
    ///
    /// # Fields
    /// - Short description of the attempted action, e.g. "toggle logs"
    #[error("Not authorized to {0}")]
    NotAuthorized(String),

    /// Invoker lacks a guild permission required by a moderation command.
    ///
    /// # Fields
    /// - Name of the missing permission
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    /// Command name is not present in the registry.
    #[error("Command `{0}` not found")]
    UnknownCommand(String),

    /// Command name was registered twice.
    #[error("Command `{0}` is already registered")]
    DuplicateCommand(String),

    /// Command is registered but currently disabled by the owner.
    #[error("Command `{0}` is disabled")]
    Disabled(String),

    /// Required argument was not supplied.
    ///
    /// # Fields
    /// - Usage string for the command, e.g. "!a <command>"
    #[error("Missing required argument, usage: {0}")]
    MissingArgument(String),

    /// Argument was supplied but could not be used.
    #[error("{0}")]
    InvalidArgument(String),

    /// Command only works inside a guild channel.
    #[error("Command can only be used in a server")]
    GuildOnly,

    /// Feature is unavailable because its configuration is missing.
    #[error("{0}")]
    Unavailable(String),
}

impl CommandError {
    /// Returns the rejection message sent back to the invoking user.
    ///
    /// # Returns
    /// - `String` - Reply text, prefixed with the matching status emoji
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthorized(action) => format!("⛔ You are not authorized to {}.", action),
            Self::MissingPermission(_) => {
                "⛔ You don't have permission to use this command.".to_string()
            }
            Self::UnknownCommand(name) => format!("❌ Command `{}` not found.", name),
            Self::DuplicateCommand(name) => format!("❌ Command `{}` is already registered.", name),
            Self::Disabled(name) => format!("🚫 Command `{}` is currently disabled.", name),
            Self::MissingArgument(usage) => format!("❌ Usage: `{}`", usage),
            Self::InvalidArgument(msg) => format!("❌ {}", msg),
            Self::GuildOnly => "❌ This command can only be used in a server.".to_string(),
            Self::Unavailable(msg) => format!("❌ {}", msg),
        }
    }
}
