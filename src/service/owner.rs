use crate::error::command::CommandError;

/// Owner authorization check for admin commands.
///
/// The bot has a single configured owner; every owner-only command and the registry
/// toggle consult this guard before mutating any state.
#[derive(Debug, Clone, Copy)]
pub struct OwnerGuard {
    owner_id: u64,
}

impl OwnerGuard {
    pub fn new(owner_id: u64) -> Self {
        Self { owner_id }
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn is_owner(&self, invoker_id: u64) -> bool {
        invoker_id == self.owner_id
    }

    /// Requires the invoker to be the owner.
    ///
    /// # Arguments
    /// - `invoker_id` - Discord user id of the invoker
    /// - `action` - Action description used in the rejection, e.g. "toggle logs"
    ///
    /// # Returns
    /// - `Ok(())` - Invoker is the owner
    /// - `Err(CommandError::NotAuthorized)` - Invoker is anyone else
    pub fn require(&self, invoker_id: u64, action: &str) -> Result<(), CommandError> {
        if self.is_owner(invoker_id) {
            Ok(())
        } else {
            Err(CommandError::NotAuthorized(action.to_string()))
        }
    }
}
