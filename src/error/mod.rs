//! Error types for startup and channel lifecycle operations.
//!
//! `AppError` is the top-level error returned from startup code in `main`. The
//! domain-specific enums (`ConfigError`, `PlatformError`, `ChannelError`) are
//! used by the modules that produce them and are converted into `AppError` with
//! `#[from]` where they can abort startup.

pub mod channel;
pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Only startup can fail with this error. Once the gateway session is running,
/// every event handler catches its failures locally and logs them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure opening the log file.
    #[error("Failed to open log file: {0}")]
    LogFileErr(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed.
    #[error(transparent)]
    LoggingErr(#[from] tracing_subscriber::util::TryInitError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
