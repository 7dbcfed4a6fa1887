//! Session start handlers.
//!
//! `ready` fires once per gateway connection after authentication. Guild
//! channels and voice states arrive afterwards in one guild create event per
//! guild, so the orphan sweep runs from `guild_create`, after the cache holds
//! that guild. Sweeping at `ready` would see every channel as empty, and
//! waiting for `cache_ready` would skip every guild if a single one stayed
//! unavailable.

use serenity::all::{Context, Guild, Ready};

use crate::{platform::SerenityPlatform, service::PresenceService};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user and guild list
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "Logged in as {} ({}) in {} guilds",
        ready.user.name,
        ready.user.id,
        ready.guilds.len()
    );
}

/// Handles a guild becoming available by sweeping it for orphaned channels.
///
/// Channels left behind by a previous run are recognised by their name prefix
/// and deleted if empty. Failures are logged per channel and do not stop the
/// sweep. Each guild is swept at most once per process.
///
/// # Arguments
/// - `presence` - Presence service running the sweep
/// - `ctx` - Discord context providing HTTP client and cache
/// - `guild` - Guild that was just cached
pub async fn handle_guild_create(presence: &PresenceService, ctx: Context, guild: Guild) {
    let platform = SerenityPlatform::from_context(&ctx);

    if let Some(report) = presence.sweep_guild(&platform, guild.id).await {
        tracing::info!(
            "Startup sweep of guild {} removed {} orphaned channels ({} failed)",
            guild.name,
            report.deleted,
            report.failed
        );
    }
}
