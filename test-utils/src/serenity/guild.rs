//! Test factory for creating Serenity GuildInfo objects.
//!
//! `GuildInfo` is the partial guild object Discord returns from
//! `GET /users/@me/guilds`. The factory creates valid objects by
//! deserializing JSON with the provided values.

use serenity::all::GuildInfo;

/// Creates a test GuildInfo with the given id and permission bitmask.
///
/// Discord serializes the permission bitmask as a decimal string, which is
/// what Serenity's `Permissions` deserializer expects, so the factory
/// formats `permissions` the same way.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `permissions` - Raw permission bitmask for the requesting user
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildInfo (indicates invalid test data)
pub fn create_test_guild_info(guild_id: u64, name: &str, permissions: u64) -> GuildInfo {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions.to_string(),
        "features": [],
    }))
    .expect("valid GuildInfo test JSON")
}
