use super::*;

/// Tests grouping of the default command set.
///
/// Verifies each category lists its commands in registration order and hidden
/// commands are left out.
///
/// Expected: General [help, stats], Admin [a], Hypixel [bedwars]
#[test]
fn groups_commands_in_registration_order() {
    let registry = populated_registry();

    let grouped = registry.list_by_category();
    let names = |category: CommandCategory| -> Vec<String> {
        grouped[&category].iter().map(|c| c.name.clone()).collect()
    };

    assert_eq!(grouped.len(), 3);
    assert_eq!(names(CommandCategory::General), vec!["help", "stats"]);
    assert_eq!(names(CommandCategory::Admin), vec!["a"]);
    assert_eq!(names(CommandCategory::Hypixel), vec!["bedwars"]);
}

/// Tests disabled commands are excluded from help.
///
/// Expected: `stats` missing while disabled, back after re-enabling
#[test]
fn disabled_commands_are_not_listed() {
    let mut registry = populated_registry();

    registry.toggle("stats", OWNER_ID).unwrap();
    let general: Vec<String> = registry.list_by_category()[&CommandCategory::General]
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(general, vec!["help"]);

    registry.toggle("stats", OWNER_ID).unwrap();
    let general: Vec<String> = registry.list_by_category()[&CommandCategory::General]
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(general, vec!["help", "stats"]);
}

/// Tests a category whose only command is disabled disappears entirely.
///
/// Expected: no Hypixel key in the map
#[test]
fn empty_categories_are_omitted() {
    let mut registry = populated_registry();

    registry.toggle("bedwars", OWNER_ID).unwrap();

    assert!(!registry
        .list_by_category()
        .contains_key(&CommandCategory::Hypixel));
}
