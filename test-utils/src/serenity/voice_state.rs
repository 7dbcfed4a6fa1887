//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

use crate::serenity::member::member_json;

/// Creates a test Serenity voice state with member data.
///
/// Mirrors the payload of a `VOICE_STATE_UPDATE` gateway event, which always
/// carries the guild member for guild voice channels.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Connected voice channel, or `None` when disconnected
/// - `user_id` - Discord user ID of the member
/// - `username` - Member's username (also their display name)
/// - `bot` - Whether the member is a bot account
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::voice_state::create_test_voice_state;
///
/// // Member connected to channel 111
/// let state = create_test_voice_state(123, Some(111), 42, "Ann", false);
///
/// // Same member after disconnecting
/// let state = create_test_voice_state(123, None, 42, "Ann", false);
/// ```
pub fn create_test_voice_state(
    guild_id: u64,
    channel_id: Option<u64>,
    user_id: u64,
    username: &str,
    bot: bool,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": member_json(guild_id, user_id, username, bot),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
