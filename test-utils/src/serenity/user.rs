//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test User with the given id and username.
///
/// All optional profile fields are left unset, matching the minimal payload
/// Discord returns for a user without a customized profile.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("valid User test JSON")
}
