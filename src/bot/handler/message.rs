//! Prefix command handling.
//!
//! The only command is `!status`, which reports how many temporary channels
//! the bot is currently tracking. Extra arguments after the command name are
//! ignored.

use serenity::all::{Context, Message};

use crate::{config::COMMAND_PREFIX, service::PresenceService};

/// Text commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report bot liveness and the tracked channel count.
    Status,
}

/// Parses a prefix command from message content.
///
/// # Arguments
/// - `content` - Raw message content
///
/// # Returns
/// - `Some(Command)` - Content starts with the prefix followed by a known command
/// - `None` - Not a command, or an unknown one
pub fn parse_command(content: &str) -> Option<Command> {
    let rest = content.trim_start().strip_prefix(COMMAND_PREFIX)?;

    match rest.split(char::is_whitespace).next()? {
        "status" => Some(Command::Status),
        _ => None,
    }
}

/// Handle message creation in a channel
pub async fn handle_message(presence: &PresenceService, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = parse_command(&message.content) else {
        return;
    };

    let reply = match command {
        Command::Status => presence.status_message().await,
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to {:?} command in channel {}: {:?}",
            command,
            message.channel_id,
            e
        );
    }
}
