//! Tempvoice Test Utils
//!
//! Provides shared testing utilities for the tempvoice bot. The crate builds
//! Serenity model objects from JSON the way Discord's gateway and REST API
//! deliver them, so conversion code can be tested against real payload shapes
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! #[test]
//! fn test_voice_transition() {
//!     let state = create_test_voice_state(123, Some(111), 42, "Ann", false);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
