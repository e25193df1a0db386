use super::*;

/// Tests that the owner can disable a command.
///
/// Verifies the returned state, the descriptor flag, and the disabled set.
///
/// Expected: Ok(false) with `stats` in the disabled set
#[test]
fn owner_disables_command() {
    let mut registry = populated_registry();

    let enabled = registry.toggle("stats", OWNER_ID).unwrap();

    assert!(!enabled);
    assert_eq!(registry.is_enabled("stats"), Some(false));
    assert!(registry.disabled().contains("stats"));
    assert_disabled_set_consistent(&registry);
}

/// Tests that toggling twice restores the original state.
///
/// Expected: Ok(false) then Ok(true), disabled set empty afterwards
#[test]
fn toggling_twice_restores_original_state() {
    let mut registry = populated_registry();

    assert!(!registry.toggle("bedwars", OWNER_ID).unwrap());
    assert_disabled_set_consistent(&registry);
    assert!(registry.toggle("bedwars", OWNER_ID).unwrap());
    assert_disabled_set_consistent(&registry);

    assert_eq!(registry.is_enabled("bedwars"), Some(true));
    assert!(registry.disabled().is_empty());
}

/// Tests the disabled set stays in sync across an arbitrary toggle sequence.
///
/// Expected: consistency holds after every step
#[test]
fn disabled_set_tracks_every_toggle() {
    let mut registry = populated_registry();
    let sequence = [
        "help", "a", "help", "debug", "stats", "a", "a", "bedwars", "debug", "help",
    ];

    for name in sequence {
        registry.toggle(name, OWNER_ID).unwrap();
        assert_disabled_set_consistent(&registry);
    }

    // odd counts (help, a, stats, bedwars) end disabled; debug was toggled twice
    let mut disabled: Vec<&str> = registry.disabled().iter().map(String::as_str).collect();
    disabled.sort_unstable();
    assert_eq!(disabled, vec!["a", "bedwars", "help", "stats"]);
}

/// Tests that a non-owner toggle is rejected without mutation.
///
/// Expected: Err(CommandError::NotAuthorized) and nothing disabled
#[test]
fn non_owner_is_rejected() {
    let mut registry = populated_registry();

    let result = registry.toggle("stats", OTHER_ID);

    assert!(matches!(result, Err(CommandError::NotAuthorized(_))));
    assert_eq!(registry.is_enabled("stats"), Some(true));
    assert!(registry.disabled().is_empty());
}

/// Tests that a non-owner is rejected even for unknown names.
///
/// Authorization is checked first so registry contents are not revealed.
///
/// Expected: Err(CommandError::NotAuthorized)
#[test]
fn non_owner_rejected_before_lookup() {
    let mut registry = populated_registry();

    let result = registry.toggle("does-not-exist", OTHER_ID);

    assert!(matches!(result, Err(CommandError::NotAuthorized(_))));
}

/// Tests toggling an unregistered command as owner.
///
/// Expected: Err(CommandError::UnknownCommand) and no state change
#[test]
fn unknown_command_is_rejected() {
    let mut registry = populated_registry();

    let result = registry.toggle("play", OWNER_ID);

    assert_eq!(
        result.unwrap_err(),
        CommandError::UnknownCommand("play".to_string())
    );
    assert!(registry.disabled().is_empty());
}
