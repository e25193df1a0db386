//! Command descriptor models.
//!
//! Provides the registry record for each invocable chat command. The display category
//! is fixed when the command is registered and decides which section of the help embed
//! the command is listed under.

/// Help section a command is listed under.
///
/// Variant order is the registry's map order; the help embed renders its own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandCategory {
    General,
    Admin,
    Hypixel,
}

impl CommandCategory {
    /// Heading used for this category in the help embed.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::General => "✨ General Commands",
            Self::Admin => "🔒 Admin Commands",
            Self::Hypixel => "🧱 Hypixel Commands",
        }
    }
}

/// Registry record of one invocable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Unique command name, without prefix.
    pub name: String,
    /// Help section the command is listed under.
    pub category: CommandCategory,
    /// Whether the command may currently be executed.
    pub enabled: bool,
    /// Single line description shown in help.
    pub help_text: String,
    /// Argument usage shown when an invocation is malformed, e.g. "!a <command>".
    pub usage: Option<String>,
    /// Excluded from the help listing.
    pub hidden: bool,
}

/// Parameters for registering a command.
#[derive(Debug, Clone)]
pub struct RegisterCommandParam {
    pub name: String,
    pub category: CommandCategory,
    pub help_text: String,
    pub usage: Option<String>,
    pub hidden: bool,
}

impl RegisterCommandParam {
    pub fn new(name: &str, category: CommandCategory, help_text: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            help_text: help_text.to_string(),
            usage: None,
            hidden: false,
        }
    }

    pub fn usage(mut self, usage: &str) -> Self {
        self.usage = Some(usage.to_string());
        self
    }

    #[cfg(test)]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn into_descriptor(self) -> CommandDescriptor {
        CommandDescriptor {
            name: self.name,
            category: self.category,
            enabled: true,
            help_text: self.help_text,
            usage: self.usage,
            hidden: self.hidden,
        }
    }
}
