use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

/// Marker every temporary channel name starts with. Used by the startup sweep
/// to recognise channels left behind by a previous run.
pub const TEMP_CHANNEL_PREFIX: &str = "🔊│";

/// Prefix for text commands such as `!status`.
pub const COMMAND_PREFIX: &str = "!";

/// Log file that receives a copy of every console log line.
const LOG_FILE: &str = "discord_bot.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,

    pub trigger_channel_id: ChannelId,
    pub category_id: Option<ChannelId>,

    pub channel_prefix: String,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never
    /// touch global state.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Token or trigger channel missing, or an ID
    ///   failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("TOKEN")
            .or_else(|| lookup("DISCORD_TOKEN"))
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("TOKEN".to_string()))?;

        let trigger_value = lookup("TRIGGER_CHANNEL_ID")
            .ok_or_else(|| ConfigError::MissingEnvVar("TRIGGER_CHANNEL_ID".to_string()))?;
        let trigger_id = parse_id("TRIGGER_CHANNEL_ID", &trigger_value)?;
        if trigger_id == 0 {
            return Err(ConfigError::ZeroId("TRIGGER_CHANNEL_ID".to_string()).into());
        }

        // Unset, empty and 0 all mean "create channels at the guild root"
        let category_id = match lookup("CATEGORY_ID").filter(|v| !v.trim().is_empty()) {
            Some(value) => match parse_id("CATEGORY_ID", &value)? {
                0 => None,
                id => Some(ChannelId::new(id)),
            },
            None => None,
        };

        Ok(Self {
            discord_bot_token,
            trigger_channel_id: ChannelId::new(trigger_id),
            category_id,
            channel_prefix: TEMP_CHANNEL_PREFIX.to_string(),
            log_file: LOG_FILE.to_string(),
        })
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidId {
            name: name.to_string(),
            value: value.to_string(),
            source: e,
        })
}
