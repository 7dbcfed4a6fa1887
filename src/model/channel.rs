//! Voice channel domain model.
//!
//! Provides the view of a Discord voice channel used by the Channel Manager:
//! identity, display name, parent category and current occupancy. Handles
//! conversion from Serenity's `GuildChannel` at the platform boundary.

use serenity::all::{ChannelId, GuildChannel, GuildId};

/// Discord voice channel with its current occupant count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    /// Discord channel ID.
    pub id: ChannelId,
    /// Guild the channel belongs to.
    pub guild_id: GuildId,
    /// Channel display name.
    pub name: String,
    /// Parent category, if the channel is not at the guild root.
    pub category_id: Option<ChannelId>,
    /// Number of members currently connected to the channel.
    pub occupants: usize,
}

impl VoiceChannel {
    /// Converts a Serenity guild channel into the domain model.
    ///
    /// Serenity channels carry no occupancy; the caller supplies it from the
    /// guild's cached voice states.
    ///
    /// # Arguments
    /// - `channel` - The guild channel returned by Discord
    /// - `occupants` - Number of voice states pointing at this channel
    ///
    /// # Returns
    /// - `VoiceChannel` - Domain model for the channel
    pub fn from_guild_channel(channel: &GuildChannel, occupants: usize) -> Self {
        Self {
            id: channel.id,
            guild_id: channel.guild_id,
            name: channel.name.clone(),
            category_id: channel.parent_id,
            occupants,
        }
    }

    /// Whether nobody is connected to the channel.
    pub fn is_empty(&self) -> bool {
        self.occupants == 0
    }

    /// Whether the channel name carries the temporary channel marker.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}

/// Builds the name of a member's temporary channel.
///
/// # Arguments
/// - `prefix` - Temporary channel marker
/// - `display_name` - Display name of the member the channel is created for
///
/// # Returns
/// - `String` - `<prefix><display name>'s Channel`
pub fn temporary_channel_name(prefix: &str, display_name: &str) -> String {
    format!("{}{}'s Channel", prefix, display_name)
}
