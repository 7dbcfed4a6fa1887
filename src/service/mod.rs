//! Channel lifecycle business logic.
//!
//! - `channel_manager` - Creates, deletes and sweeps temporary channels and owns the tracked set
//! - `presence` - Routes voice presence events, startup sweeps and status requests into the manager
//!
//! Services act through a `VoicePlatform` passed into each call, never through
//! Serenity directly.

pub mod channel_manager;
pub mod presence;

pub use presence::PresenceService;
