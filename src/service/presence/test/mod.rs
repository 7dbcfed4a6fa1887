use std::io;
use std::sync::{Arc, Mutex};

use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    error::channel::PlatformError,
    model::{VoiceMember, VoiceTransition},
    platform::mock::MockPlatform,
    service::{
        channel_manager::{ChannelManager, SweepReport},
        presence::{PresenceService, TransitionOutcome},
    },
};


const PREFIX: &str = "🔊│";
const GUILD_ID: u64 = 123;
const TRIGGER_ID: u64 = 111;

fn service() -> PresenceService {
    PresenceService::new(ChannelManager::new(PREFIX, None), ChannelId::new(TRIGGER_ID))
}

/// Platform with the trigger channel and one ordinary voice channel.
fn platform() -> MockPlatform {
    MockPlatform::new()
        .with_channel(GUILD_ID, TRIGGER_ID, "➕ Join to Create", 0)
        .with_channel(GUILD_ID, 222, "General", 0)
}

fn transition(
    user_id: u64,
    name: &str,
    bot: bool,
    before: Option<ChannelId>,
    after: Option<ChannelId>,
) -> VoiceTransition {
    VoiceTransition {
        guild_id: GuildId::new(GUILD_ID),
        member: VoiceMember {
            user_id: UserId::new(user_id),
            display_name: name.to_string(),
            bot,
        },
        before,
        after,
    }
}

/// Connects a member on the platform and returns the matching transition.
fn move_to(
    platform: &MockPlatform,
    user_id: u64,
    name: &str,
    after: Option<ChannelId>,
) -> VoiceTransition {
    let before = platform.location(user_id);
    platform.connect(user_id, after);
    transition(user_id, name, false, before, after)
}

/// Log output of a scoped `tracing` subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Installs a plain-text subscriber writing into the returned buffer for the
    /// current thread until the guard is dropped.
    fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        (logs, tracing::subscriber::set_default(subscriber))
    }

    fn lines_at(&self, level: &str) -> Vec<String> {
        let marker = format!(" {} ", level);
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .filter(|line| line.contains(&marker))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
