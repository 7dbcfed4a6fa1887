//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test Serenity voice channel.
///
/// Creates a GuildChannel of type `GUILD_VOICE` by deserializing JSON with the
/// provided values. All other fields are set to Discord's defaults for a new
/// voice channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `parent_id` - Optional category channel ID
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": 2,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": parent_id.map(|id| id.to_string()),
        "bitrate": 64000,
        "user_limit": 0,
        "rtc_region": null,
        "flags": 0,
    }))
    .expect("Failed to create test voice channel - invalid JSON structure")
}
