//! Discord bot session for temporary voice channels.
//!
//! This module owns the Serenity client and its event handler. Gateway events
//! are converted into domain values and handed to the `PresenceService`; the
//! handler itself holds no channel state.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for the cache (orphan sweep, categories)
//! - `GUILD_VOICE_STATES` - Voice state updates and cached occupancy
//! - `GUILD_MESSAGES` - Messages carrying the `!status` command
//! - `MESSAGE_CONTENT` - Content of those messages
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
