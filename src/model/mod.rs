//! Domain models for temporary voice channels.
//!
//! These types carry only what the channel lifecycle logic reads from Discord.
//! Serenity objects are converted into them at the bot handler and platform
//! adapter boundaries so the services never depend on gateway payloads.

pub mod channel;
pub mod member;
pub mod transition;

pub use channel::VoiceChannel;
pub use member::VoiceMember;
pub use transition::VoiceTransition;
