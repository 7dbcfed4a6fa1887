use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but is not a valid Discord ID.
    #[error("Environment variable {name} has invalid ID '{value}': {source}")]
    InvalidId {
        /// Name of the environment variable
        name: String,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Environment variable parsed to zero where a real ID is required.
    ///
    /// Discord snowflakes are never zero, so this always indicates a placeholder
    /// value that was never filled in.
    #[error("Environment variable {0} must be a non-zero Discord ID")]
    ZeroId(String),
}
