//! Discord capabilities used by the channel lifecycle logic.
//!
//! The `VoicePlatform` trait is the seam between the services and Discord. The
//! production implementation, `SerenityPlatform`, wraps Serenity's HTTP client
//! and cache; unit tests use an in-memory implementation that records calls and
//! can be told to fail.
//!
//! Every fallible method returns a `PlatformError` already classified into
//! permission, not-found and other failures, so callers branch on data rather
//! than inspecting Serenity error payloads.

pub mod discord;

#[cfg(test)]
pub mod mock;

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::{error::channel::PlatformError, model::VoiceChannel};

pub use discord::SerenityPlatform;

#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Creates a voice channel in a guild, inside `category_id` when given.
    async fn create_voice_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        category_id: Option<ChannelId>,
    ) -> Result<VoiceChannel, PlatformError>;

    /// Grants a member connect, speak, manage-channel and move-members on a channel.
    async fn grant_owner_permissions(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
    ) -> Result<(), PlatformError>;

    /// Deletes a channel.
    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), PlatformError>;

    /// Lists the voice channels of a guild with their current occupancy.
    async fn voice_channels(&self, guild_id: GuildId) -> Result<Vec<VoiceChannel>, PlatformError>;

    /// Moves a connected member into a voice channel.
    async fn move_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError>;

    /// Number of members currently connected to a voice channel.
    fn occupant_count(&self, guild_id: GuildId, channel_id: ChannelId) -> usize;

    /// Whether the guild has a category channel with this ID.
    fn has_category(&self, guild_id: GuildId, category_id: ChannelId) -> bool;
}
