//! Command registry and toggle store.
//!
//! This module provides the `CommandRegistry` which tracks every chat command the bot
//! understands, the help category it belongs to, and whether the owner has disabled it.
//! The set of disabled names and each descriptor's `enabled` flag are only ever changed
//! together by [`CommandRegistry::toggle`], so a name is disabled exactly when its
//! descriptor says so.

use std::collections::{BTreeMap, HashSet};

use crate::{
    error::command::CommandError,
    model::command::{CommandCategory, CommandDescriptor, RegisterCommandParam},
    service::owner::OwnerGuard,
};

/// Registry of invocable commands with owner-controlled enable/disable toggling.
///
/// Shared between the command dispatcher and the help renderer through `BotState`
/// behind a `tokio::sync::RwLock`.
#[derive(Debug)]
pub struct CommandRegistry {
    owner: OwnerGuard,
    /// Descriptors in registration order.
    commands: Vec<CommandDescriptor>,
    /// Names of commands currently disabled.
    disabled: HashSet<String>,
}

impl CommandRegistry {
    /// Creates an empty registry whose toggles are restricted to the given owner.
    pub fn new(owner: OwnerGuard) -> Self {
        Self {
            owner,
            commands: Vec::new(),
            disabled: HashSet::new(),
        }
    }

    /// Registers a new command, enabled.
    ///
    /// # Arguments
    /// - `param` - Name, category, help text, and optional usage of the command
    ///
    /// # Returns
    /// - `Ok(&CommandDescriptor)` - The stored descriptor
    /// - `Err(CommandError::DuplicateCommand)` - A command with this name already exists
    pub fn register(
        &mut self,
        param: RegisterCommandParam,
    ) -> Result<&CommandDescriptor, CommandError> {
        if self.get(&param.name).is_some() {
            return Err(CommandError::DuplicateCommand(param.name));
        }

        self.commands.push(param.into_descriptor());
        let index = self.commands.len() - 1;

        Ok(&self.commands[index])
    }

    /// Flips the enabled state of a command.
    ///
    /// Authorization is checked before the name is looked up, so a non-owner learns
    /// nothing about which commands exist and never changes any state.
    ///
    /// # Arguments
    /// - `name` - Command name without prefix
    /// - `requester_id` - Discord user id of the invoker
    ///
    /// # Returns
    /// - `Ok(true)` - Command is now enabled
    /// - `Ok(false)` - Command is now disabled
    /// - `Err(CommandError::NotAuthorized)` - Requester is not the owner
    /// - `Err(CommandError::UnknownCommand)` - No command with this name is registered
    pub fn toggle(&mut self, name: &str, requester_id: u64) -> Result<bool, CommandError> {
        self.owner.require(requester_id, "toggle commands")?;

        let descriptor = self
            .commands
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        descriptor.enabled = !descriptor.enabled;
        if descriptor.enabled {
            self.disabled.remove(name);
        } else {
            self.disabled.insert(name.to_string());
        }

        Ok(descriptor.enabled)
    }

    /// Returns the descriptor for a command name.
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Reports whether a command may currently run.
    ///
    /// # Returns
    /// - `Some(true)` / `Some(false)` - Registered and enabled / disabled
    /// - `None` - Not registered
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.get(name).map(|c| c.enabled)
    }

    /// Groups enabled, non-hidden commands by category in registration order.
    ///
    /// Categories without any listed command are absent from the map.
    pub fn list_by_category(&self) -> BTreeMap<CommandCategory, Vec<CommandDescriptor>> {
        let mut grouped: BTreeMap<CommandCategory, Vec<CommandDescriptor>> = BTreeMap::new();

        for command in self.commands.iter().filter(|c| c.enabled && !c.hidden) {
            grouped
                .entry(command.category)
                .or_default()
                .push(command.clone());
        }

        grouped
    }

    /// Names of the commands currently disabled.
    #[cfg(test)]
    pub fn disabled(&self) -> &HashSet<String> {
        &self.disabled
    }

    /// Number of registered commands, enabled or not.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
