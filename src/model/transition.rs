//! Voice presence transition model.
//!
//! A `VoiceTransition` is one member moving between voice channels (or joining
//! or leaving voice entirely) within a guild. It is built from the pair of
//! Serenity `VoiceState`s delivered with a `voice_state_update` event.

use serenity::all::{ChannelId, GuildId, VoiceState};

use crate::model::member::VoiceMember;

/// One member's voice channel change within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceTransition {
    /// Guild the transition happened in.
    pub guild_id: GuildId,
    /// Member whose voice state changed.
    pub member: VoiceMember,
    /// Channel the member was connected to before, if any.
    pub before: Option<ChannelId>,
    /// Channel the member is connected to now, if any.
    pub after: Option<ChannelId>,
}

impl VoiceTransition {
    /// Builds a transition from a `voice_state_update` event.
    ///
    /// The previous channel comes from the cached old state when Serenity has
    /// one. Events outside a guild, or without member data, cannot be acted on
    /// and produce `None`.
    ///
    /// # Arguments
    /// - `old` - Previous voice state from the cache, if available
    /// - `new` - Voice state after the update
    ///
    /// # Returns
    /// - `Some(VoiceTransition)` - Guild event with member data
    /// - `None` - Missing guild ID or member data
    pub fn from_voice_states(old: Option<&VoiceState>, new: &VoiceState) -> Option<Self> {
        let guild_id = new.guild_id?;
        let member = new.member.as_ref()?;

        Some(Self {
            guild_id,
            member: VoiceMember::from_member(member),
            before: old.and_then(|state| state.channel_id),
            after: new.channel_id,
        })
    }

    /// Whether the member entered `channel_id` with this transition.
    pub fn joined(&self, channel_id: ChannelId) -> bool {
        self.after == Some(channel_id)
    }
}
