use serenity::all::{Context, VoiceState};

use crate::{model::VoiceTransition, platform::SerenityPlatform, service::PresenceService};

/// Handles a voice state update by creating or deleting temporary channels.
///
/// Serenity updates its cache before dispatching the event, so occupancy read
/// from the cache already reflects this transition.
///
/// # Arguments
/// - `presence` - Presence service deciding what to do with the transition
/// - `ctx` - Discord context providing HTTP client and cache
/// - `old` - Cached voice state before the update, if any
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    presence: &PresenceService,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(transition) = VoiceTransition::from_voice_states(old.as_ref(), &new) else {
        tracing::debug!(
            "Ignoring voice state update for user {} without guild member data",
            new.user_id
        );
        return;
    };

    let platform = SerenityPlatform::from_context(&ctx);
    let outcome = presence.handle_voice_transition(&platform, &transition).await;

    // Nobody will ever leave the new channel, so only the next startup sweep removes it
    if let (Some(channel_id), false) = (outcome.created, outcome.moved) {
        tracing::warn!(
            "Temporary channel {} for {} stays empty until the next startup sweep",
            channel_id,
            transition.member.display_name
        );
    }
}
