use crate::{
    error::command::CommandError,
    model::command::{CommandCategory, RegisterCommandParam},
    service::{command_registry::CommandRegistry, owner::OwnerGuard},
};

mod list_by_category;
mod register;
mod toggle;

const OWNER_ID: u64 = 100;
const OTHER_ID: u64 = 200;

/// Registry with one command per category plus a hidden general command.
fn populated_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(OwnerGuard::new(OWNER_ID));

    registry
        .register(RegisterCommandParam::new(
            "help",
            CommandCategory::General,
            "Show all available commands.",
        ))
        .unwrap();
    registry
        .register(RegisterCommandParam::new(
            "stats",
            CommandCategory::General,
            "Shows detailed bot statistics.",
        ))
        .unwrap();
    registry
        .register(
            RegisterCommandParam::new("a", CommandCategory::Admin, "Enable/disable a command.")
                .usage("!a <command>"),
        )
        .unwrap();
    registry
        .register(
            RegisterCommandParam::new(
                "bedwars",
                CommandCategory::Hypixel,
                "Displays BedWars statistics for a given player.",
            )
            .usage("!bedwars <username>"),
        )
        .unwrap();
    registry
        .register(
            RegisterCommandParam::new("debug", CommandCategory::General, "Internal diagnostics.")
                .hidden(true),
        )
        .unwrap();

    registry
}

/// Asserts the disabled set matches exactly the descriptors with `enabled == false`.
fn assert_disabled_set_consistent(registry: &CommandRegistry) {
    for name in ["help", "stats", "a", "bedwars", "debug"] {
        let enabled = registry.is_enabled(name).unwrap();
        assert_eq!(
            registry.disabled().contains(name),
            !enabled,
            "disabled set out of sync for `{}`",
            name
        );
    }
    assert!(registry
        .disabled()
        .iter()
        .all(|name| registry.is_enabled(name) == Some(false)));
}
