use serenity::all::{Context, EventHandler, Guild, Message, Ready, VoiceState};
use serenity::async_trait;

use crate::service::PresenceService;

pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub presence: PresenceService,
}

impl Handler {
    pub fn new(presence: PresenceService) -> Self {
        Self { presence }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins one
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        ready::handle_guild_create(&self.presence, ctx, guild).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.presence, ctx, old, new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.presence, ctx, message).await;
    }
}
