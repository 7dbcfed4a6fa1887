//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (GuildChannel, Member, VoiceState) for testing purposes. These factories
//! create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Available Factories
//!
//! - `channel::create_test_voice_channel` - Create Serenity voice GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod channel;
pub mod member;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::create_test_voice_channel;
pub use member::create_test_member;
pub use voice_state::create_test_voice_state;
