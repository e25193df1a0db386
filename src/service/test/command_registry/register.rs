use super::*;

/// Tests registering a new command.
///
/// Verifies that the stored descriptor carries the given category, help text, and
/// usage, and that new commands start enabled.
///
/// Expected: Ok(descriptor) with enabled=true
#[test]
fn registers_command_enabled() {
    let mut registry = CommandRegistry::new(OwnerGuard::new(OWNER_ID));

    let descriptor = registry
        .register(
            RegisterCommandParam::new("ban", CommandCategory::Admin, "Ban a member.")
                .usage("!ban <@user|user_id> [reason]"),
        )
        .unwrap();

    assert_eq!(descriptor.name, "ban");
    assert_eq!(descriptor.category, CommandCategory::Admin);
    assert_eq!(descriptor.help_text, "Ban a member.");
    assert_eq!(descriptor.usage.as_deref(), Some("!ban <@user|user_id> [reason]"));
    assert!(descriptor.enabled);
    assert!(!descriptor.hidden);
    assert_eq!(registry.command_count(), 1);
    assert_eq!(registry.is_enabled("ban"), Some(true));
}

/// Tests registering the same name twice.
///
/// Verifies that the second registration is rejected and the original descriptor
/// is left untouched.
///
/// Expected: Err(CommandError::DuplicateCommand)
#[test]
fn rejects_duplicate_name() {
    let mut registry = populated_registry();
    let before = registry.command_count();

    let result = registry.register(RegisterCommandParam::new(
        "help",
        CommandCategory::Admin,
        "Another help.",
    ));

    assert_eq!(
        result.unwrap_err(),
        CommandError::DuplicateCommand("help".to_string())
    );
    assert_eq!(registry.command_count(), before);
    assert_eq!(
        registry.get("help").unwrap().category,
        CommandCategory::General
    );
}

/// Tests looking up a name that was never registered.
///
/// Expected: None from both lookups
#[test]
fn unknown_name_has_no_state() {
    let registry = populated_registry();

    assert!(registry.get("play").is_none());
    assert_eq!(registry.is_enabled("play"), None);
}
