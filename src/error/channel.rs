use serenity::all::ChannelId;
use thiserror::Error;

/// Classified failure of a single Discord platform call.
///
/// Produced by `VoicePlatform` implementations. The classification is the only
/// thing the channel lifecycle logic branches on; the original error text is
/// kept for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Discord rejected the action because the bot lacks a permission.
    #[error("Missing permissions: {0}")]
    PermissionDenied(String),

    /// The target of the request no longer exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other HTTP, gateway or cache failure.
    #[error("{0}")]
    Other(String),
}

/// Result kind of Channel Manager operations.
///
/// Callers branch on this value instead of on logged output. Every variant has
/// already been logged by the Channel Manager when it is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The bot is not allowed to create, configure or delete the channel.
    #[error("Bot doesn't have permission to manage channels: {0}")]
    PermissionDenied(String),

    /// Delete was requested for a channel this process does not track.
    #[error("Channel {0} is not a tracked temporary channel")]
    NotTracked(ChannelId),

    /// Unclassified platform or network failure.
    #[error("Platform error: {0}")]
    Platform(String),
}

impl From<PlatformError> for ChannelError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::PermissionDenied(msg) => ChannelError::PermissionDenied(msg),
            PlatformError::NotFound(msg) | PlatformError::Other(msg) => {
                ChannelError::Platform(msg)
            }
        }
    }
}
