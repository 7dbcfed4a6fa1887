use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    error::channel::{ChannelError, PlatformError},
    model::VoiceMember,
    platform::mock::MockPlatform,
    service::channel_manager::{ChannelManager, DeleteOutcome, SweepReport},
};


const PREFIX: &str = "🔊│";
const GUILD_ID: u64 = 123;

fn guild() -> GuildId {
    GuildId::new(GUILD_ID)
}

fn member(user_id: u64, name: &str) -> VoiceMember {
    VoiceMember {
        user_id: UserId::new(user_id),
        display_name: name.to_string(),
        bot: false,
    }
}
