//! Voice presence dispatch.
//!
//! The `PresenceService` turns gateway-level happenings (a member's voice state
//! changing, a guild becoming available, a status request) into Channel Manager
//! operations. It contains all branching of the bot but no Serenity types, so
//! it runs unchanged against the in-memory platform in tests.
//!
//! No error leaves this module: every failure has been logged by the time a
//! method returns, and nothing is retried.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::channel::ChannelError,
    model::VoiceTransition,
    platform::VoicePlatform,
    service::channel_manager::{ChannelManager, SweepReport},
};

/// What handling a single voice transition did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// Temporary channel created for the member, if any.
    pub created: Option<ChannelId>,
    /// Whether the member was moved into the created channel.
    pub moved: bool,
    /// Temporary channel deleted because it became empty, if any.
    pub deleted: Option<ChannelId>,
}

/// Routes voice presence events into channel lifecycle operations.
#[derive(Clone)]
pub struct PresenceService {
    /// Owner of the tracked temporary channels
    manager: ChannelManager,
    /// Channel whose entry spawns a temporary channel
    trigger_channel_id: ChannelId,
    /// Guilds already swept for orphaned channels by this process
    swept_guilds: Arc<RwLock<HashSet<GuildId>>>,
}

impl PresenceService {
    pub fn new(manager: ChannelManager, trigger_channel_id: ChannelId) -> Self {
        Self {
            manager,
            trigger_channel_id,
            swept_guilds: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ChannelManager::from_config(config), config.trigger_channel_id)
    }

    #[cfg(test)]
    pub fn manager(&self) -> &ChannelManager {
        &self.manager
    }

    /// Handles one member's voice channel change.
    ///
    /// Bot accounts are ignored. A member entering the trigger channel gets a
    /// temporary channel and is moved into it. If the channel the member left is
    /// tracked and now has nobody in it, it is deleted. Both branches can apply
    /// to the same transition.
    ///
    /// A failed move leaves the new channel in place and tracked; nobody will
    /// ever leave it, so it stays until the next startup sweep.
    ///
    /// # Arguments
    /// - `platform` - Discord capabilities to act through
    /// - `transition` - The member's previous and current voice channel
    ///
    /// # Returns
    /// - `TransitionOutcome` - Channels created, moved into or deleted
    pub async fn handle_voice_transition<P>(
        &self,
        platform: &P,
        transition: &VoiceTransition,
    ) -> TransitionOutcome
    where
        P: VoicePlatform + ?Sized,
    {
        let mut outcome = TransitionOutcome::default();
        let member = &transition.member;

        if member.bot {
            tracing::debug!("Ignoring voice state update from bot {}", member.user_id);
            return outcome;
        }

        if transition.joined(self.trigger_channel_id) {
            if let Ok(channel) = self
                .manager
                .create_temporary_channel(platform, transition.guild_id, member)
                .await
            {
                outcome.created = Some(channel.id);

                match platform
                    .move_member(transition.guild_id, member.user_id, channel.id)
                    .await
                {
                    Ok(()) => {
                        outcome.moved = true;
                        tracing::info!(
                            "Created temporary channel {} for {}",
                            channel.name,
                            member.display_name
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to move {} into temporary channel {}: {}",
                            member.display_name,
                            channel.name,
                            e
                        );
                    }
                }
            }
        }

        if let Some(previous) = transition.before {
            if self.manager.is_tracked(previous).await
                && platform.occupant_count(transition.guild_id, previous) == 0
            {
                match self.manager.delete_temporary_channel(platform, previous).await {
                    Ok(_) => {
                        outcome.deleted = Some(previous);
                        tracing::info!("Deleted empty temporary channel {}", previous);
                    }
                    Err(ChannelError::NotTracked(_)) => {
                        tracing::debug!("Temporary channel {} was deleted concurrently", previous);
                    }
                    // Already logged by the channel manager
                    Err(_) => {}
                }
            }
        }

        outcome
    }

    /// Sweeps a guild for orphaned temporary channels, once per process.
    ///
    /// Called as each guild becomes available, so a guild that stays
    /// unavailable does not hold back the sweep of the others. Later calls for
    /// the same guild (a reconnect re-sending the guild) do nothing, which keeps
    /// channels created since startup out of reach of the sweep.
    ///
    /// # Arguments
    /// - `platform` - Discord capabilities to act through
    /// - `guild_id` - Guild that just became available
    ///
    /// # Returns
    /// - `Some(SweepReport)` - Guild swept for the first time
    /// - `None` - Guild was already swept
    pub async fn sweep_guild<P>(&self, platform: &P, guild_id: GuildId) -> Option<SweepReport>
    where
        P: VoicePlatform + ?Sized,
    {
        if !self.swept_guilds.write().await.insert(guild_id) {
            tracing::debug!("Guild {} already swept, skipping", guild_id);
            return None;
        }

        Some(self.manager.cleanup_orphaned_channels(platform, guild_id).await)
    }

    /// Reply to the `status` command.
    pub async fn status_message(&self) -> String {
        format!(
            "Bot is running. Current temporary channels: {}",
            self.manager.tracked_count().await
        )
    }
}

#[cfg(test)]
mod test;
