//! Test factory for creating Serenity Role objects.
//!
//! Moderation checks compare role positions, so the position is the only field
//! besides id and name that callers choose.

use serenity::all::Role;

/// Creates a test Serenity Role at the given hierarchy position.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let moderator = create_test_role(111, "Moderator", 5);
/// assert_eq!(moderator.position, 5);
/// ```
pub fn create_test_role(role_id: u64, name: &str, position: u16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
