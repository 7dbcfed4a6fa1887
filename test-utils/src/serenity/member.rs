//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild member.
///
/// The member has no nickname or global name, so its display name is the
/// username passed in.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `bot` - Whether the account is a bot
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str, bot: bool) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, username, bot))
        .expect("Failed to create test member - invalid JSON structure")
}

pub(crate) fn member_json(
    guild_id: u64,
    user_id: u64,
    username: &str,
    bot: bool,
) -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": bot,
        },
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
    })
}
