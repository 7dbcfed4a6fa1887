//! Temporary voice channel lifecycle.
//!
//! The `ChannelManager` creates personal voice channels, deletes them once they
//! are empty, and sweeps guilds for channels left behind by a previous run. It
//! owns the tracked set: the IDs of channels this process created and has not
//! yet deleted. The set lives in memory only and starts empty on every run; the
//! startup sweep works purely from what Discord reports and never touches it.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::channel::{ChannelError, PlatformError},
    model::{channel::temporary_channel_name, VoiceChannel, VoiceMember},
    platform::VoicePlatform,
};

/// Successful result of deleting a tracked channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Discord deleted the channel.
    Deleted,
    /// Discord reported the channel as already gone; it is no longer tracked.
    AlreadyGone,
}

/// Result of sweeping one guild for orphaned channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Channels removed (including ones Discord reported as already gone).
    pub deleted: usize,
    /// Channels whose deletion failed and were left in place.
    pub failed: usize,
}

/// Owner of the tracked set of temporary channels.
///
/// Clones share the same tracked set, so the bot handler and any other holder
/// always see the same channels.
#[derive(Clone)]
pub struct ChannelManager {
    /// IDs of channels created by this process and not yet deleted.
    temp_channels: Arc<RwLock<HashSet<ChannelId>>>,
    /// Name marker for temporary channels.
    prefix: String,
    /// Category new channels are created in, if configured.
    category_id: Option<ChannelId>,
}

impl ChannelManager {
    /// Creates a manager with an empty tracked set.
    ///
    /// # Arguments
    /// - `prefix` - Name marker every temporary channel starts with
    /// - `category_id` - Category to create channels in, or `None` for the guild root
    pub fn new(prefix: impl Into<String>, category_id: Option<ChannelId>) -> Self {
        Self {
            temp_channels: Arc::new(RwLock::new(HashSet::new())),
            prefix: prefix.into(),
            category_id,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.channel_prefix.clone(), config.category_id)
    }

    /// Creates a temporary voice channel for a member and starts tracking it.
    ///
    /// The channel is named `<prefix><display name>'s Channel` and placed in the
    /// configured category when the guild has it, otherwise at the guild root.
    /// The member is granted connect, speak, manage-channel and move-members on
    /// the new channel. The channel is only tracked once both calls succeed.
    ///
    /// Failures are logged here; callers only need to check for `Ok`.
    ///
    /// # Arguments
    /// - `platform` - Discord capabilities to act through
    /// - `guild_id` - Guild to create the channel in
    /// - `member` - Member the channel is created for
    ///
    /// # Returns
    /// - `Ok(VoiceChannel)` - Channel created, permissions set, now tracked
    /// - `Err(ChannelError::PermissionDenied)` - Bot lacks permission to create or configure channels
    /// - `Err(ChannelError::Platform)` - Any other Discord failure
    pub async fn create_temporary_channel<P>(
        &self,
        platform: &P,
        guild_id: GuildId,
        member: &VoiceMember,
    ) -> Result<VoiceChannel, ChannelError>
    where
        P: VoicePlatform + ?Sized,
    {
        let name = temporary_channel_name(&self.prefix, &member.display_name);
        let category_id = self.resolve_category(platform, guild_id);

        let channel = platform
            .create_voice_channel(guild_id, &name, category_id)
            .await
            .map_err(|e| log_create_error(e, guild_id))?;

        // An untracked channel left here is collected by the next startup sweep
        platform
            .grant_owner_permissions(channel.id, member.user_id)
            .await
            .map_err(|e| log_create_error(e, guild_id))?;

        self.temp_channels.write().await.insert(channel.id);

        Ok(channel)
    }

    /// Deletes a tracked temporary channel and stops tracking it.
    ///
    /// Channels that are not tracked are never deleted. When Discord reports the
    /// channel as already gone it is untracked and treated as success. On any
    /// other failure the channel stays tracked.
    ///
    /// # Arguments
    /// - `platform` - Discord capabilities to act through
    /// - `channel_id` - Channel to delete
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome::Deleted)` - Channel deleted and untracked
    /// - `Ok(DeleteOutcome::AlreadyGone)` - Channel was already deleted, now untracked
    /// - `Err(ChannelError::NotTracked)` - Channel not created by this process, nothing done
    /// - `Err(ChannelError::PermissionDenied | Platform)` - Delete failed, channel still tracked
    pub async fn delete_temporary_channel<P>(
        &self,
        platform: &P,
        channel_id: ChannelId,
    ) -> Result<DeleteOutcome, ChannelError>
    where
        P: VoicePlatform + ?Sized,
    {
        if !self.is_tracked(channel_id).await {
            return Err(ChannelError::NotTracked(channel_id));
        }

        let outcome = match platform.delete_channel(channel_id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(PlatformError::NotFound(_)) => {
                tracing::debug!("Temporary channel {} was already deleted", channel_id);
                DeleteOutcome::AlreadyGone
            }
            Err(e) => {
                tracing::error!("Error deleting temporary channel {}: {}", channel_id, e);
                return Err(e.into());
            }
        };

        self.temp_channels.write().await.remove(&channel_id);

        Ok(outcome)
    }

    /// Deletes empty channels carrying the temporary prefix in a guild.
    ///
    /// Catches channels orphaned by a previous run that crashed or was stopped
    /// before its channels emptied. Works only from the guild's current voice
    /// channels; the tracked set is neither consulted nor modified. A failing
    /// channel is logged and skipped so one bad channel does not stop the sweep.
    ///
    /// # Arguments
    /// - `platform` - Discord capabilities to act through
    /// - `guild_id` - Guild to sweep
    ///
    /// # Returns
    /// - `SweepReport` - Number of channels removed and number that failed
    pub async fn cleanup_orphaned_channels<P>(&self, platform: &P, guild_id: GuildId) -> SweepReport
    where
        P: VoicePlatform + ?Sized,
    {
        let mut report = SweepReport::default();

        let channels = match platform.voice_channels(guild_id).await {
            Ok(channels) => channels,
            Err(e) => {
                tracing::error!(
                    "Error cleaning up orphaned channels in guild {}: {}",
                    guild_id,
                    e
                );
                return report;
            }
        };

        for channel in channels
            .iter()
            .filter(|channel| channel.has_prefix(&self.prefix) && channel.is_empty())
        {
            match platform.delete_channel(channel.id).await {
                Ok(()) | Err(PlatformError::NotFound(_)) => {
                    tracing::info!("Cleaned up orphaned channel: {}", channel.name);
                    report.deleted += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Error cleaning up orphaned channel {} ({}): {}",
                        channel.name,
                        channel.id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    pub async fn is_tracked(&self, channel_id: ChannelId) -> bool {
        self.temp_channels.read().await.contains(&channel_id)
    }

    /// Number of temporary channels currently tracked.
    pub async fn tracked_count(&self) -> usize {
        self.temp_channels.read().await.len()
    }

    fn resolve_category<P>(&self, platform: &P, guild_id: GuildId) -> Option<ChannelId>
    where
        P: VoicePlatform + ?Sized,
    {
        let category_id = self.category_id?;
        if platform.has_category(guild_id, category_id) {
            Some(category_id)
        } else {
            tracing::warn!(
                "Category {} not found in guild {}, creating channel at guild root",
                category_id,
                guild_id
            );
            None
        }
    }
}

fn log_create_error(err: PlatformError, guild_id: GuildId) -> ChannelError {
    match &err {
        PlatformError::PermissionDenied(_) => {
            tracing::error!(
                "Bot doesn't have permission to create channels in guild {}",
                guild_id
            );
        }
        _ => tracing::error!("Error creating temporary channel: {}", err),
    }
    err.into()
}

#[cfg(test)]
mod test;
