//! In-memory `VoicePlatform` for unit tests.
//!
//! Holds a fake guild state (voice channels, categories, member locations),
//! records every mutating call, and can be told to fail specific operations.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;

use crate::{error::channel::PlatformError, model::VoiceChannel, platform::VoicePlatform};

/// Recorded channel creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCall {
    pub guild_id: GuildId,
    pub name: String,
    pub category_id: Option<ChannelId>,
}

#[derive(Default)]
struct MockState {
    next_id: u64,
    channels: HashMap<ChannelId, VoiceChannel>,
    categories: HashSet<(GuildId, ChannelId)>,
    locations: HashMap<UserId, ChannelId>,

    creates: Vec<CreateCall>,
    grants: Vec<(ChannelId, UserId)>,
    deletes: Vec<ChannelId>,
    moves: Vec<(GuildId, UserId, ChannelId)>,

    fail_create: Option<PlatformError>,
    fail_grant: Option<PlatformError>,
    fail_move: Option<PlatformError>,
    fail_list: Option<PlatformError>,
    fail_delete: HashMap<ChannelId, PlatformError>,
}

pub struct MockPlatform {
    state: Mutex<MockState>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_id: 900_000,
                ..Default::default()
            }),
        }
    }

    /// Adds an existing voice channel with `occupants` anonymous members.
    pub fn with_channel(self, guild_id: u64, channel_id: u64, name: &str, occupants: usize) -> Self {
        let id = ChannelId::new(channel_id);
        self.state.lock().unwrap().channels.insert(
            id,
            VoiceChannel {
                id,
                guild_id: GuildId::new(guild_id),
                name: name.to_string(),
                category_id: None,
                occupants,
            },
        );
        self
    }

    pub fn with_category(self, guild_id: u64, category_id: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .categories
            .insert((GuildId::new(guild_id), ChannelId::new(category_id)));
        self
    }

    pub fn fail_create(self, err: PlatformError) -> Self {
        self.state.lock().unwrap().fail_create = Some(err);
        self
    }

    pub fn fail_grant(self, err: PlatformError) -> Self {
        self.state.lock().unwrap().fail_grant = Some(err);
        self
    }

    pub fn fail_move(self, err: PlatformError) -> Self {
        self.state.lock().unwrap().fail_move = Some(err);
        self
    }

    pub fn fail_list(self, err: PlatformError) -> Self {
        self.state.lock().unwrap().fail_list = Some(err);
        self
    }

    pub fn fail_delete(self, channel_id: u64, err: PlatformError) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_delete
            .insert(ChannelId::new(channel_id), err);
        self
    }

    /// Puts a member into a voice channel, updating occupancy on both ends.
    pub fn connect(&self, user_id: u64, channel_id: Option<ChannelId>) {
        let mut state = self.state.lock().unwrap();
        let user_id = UserId::new(user_id);
        Self::relocate(&mut state, user_id, channel_id);
    }

    /// Removes a channel as if someone deleted it outside the bot.
    pub fn remove_channel(&self, channel_id: ChannelId) {
        self.state.lock().unwrap().channels.remove(&channel_id);
    }

    pub fn channel(&self, channel_id: ChannelId) -> Option<VoiceChannel> {
        self.state.lock().unwrap().channels.get(&channel_id).cloned()
    }

    pub fn location(&self, user_id: u64) -> Option<ChannelId> {
        self.state
            .lock()
            .unwrap()
            .locations
            .get(&UserId::new(user_id))
            .copied()
    }

    pub fn creates(&self) -> Vec<CreateCall> {
        self.state.lock().unwrap().creates.clone()
    }

    pub fn grants(&self) -> Vec<(ChannelId, UserId)> {
        self.state.lock().unwrap().grants.clone()
    }

    pub fn deletes(&self) -> Vec<ChannelId> {
        self.state.lock().unwrap().deletes.clone()
    }

    pub fn moves(&self) -> Vec<(GuildId, UserId, ChannelId)> {
        self.state.lock().unwrap().moves.clone()
    }

    fn relocate(state: &mut MockState, user_id: UserId, channel_id: Option<ChannelId>) {
        if let Some(previous) = state.locations.remove(&user_id) {
            if let Some(channel) = state.channels.get_mut(&previous) {
                channel.occupants = channel.occupants.saturating_sub(1);
            }
        }
        if let Some(channel_id) = channel_id {
            if let Some(channel) = state.channels.get_mut(&channel_id) {
                channel.occupants += 1;
            }
            state.locations.insert(user_id, channel_id);
        }
    }
}

#[async_trait]
impl VoicePlatform for MockPlatform {
    async fn create_voice_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        category_id: Option<ChannelId>,
    ) -> Result<VoiceChannel, PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.creates.push(CreateCall {
            guild_id,
            name: name.to_string(),
            category_id,
        });
        if let Some(err) = state.fail_create.clone() {
            return Err(err);
        }

        state.next_id += 1;
        let channel = VoiceChannel {
            id: ChannelId::new(state.next_id),
            guild_id,
            name: name.to_string(),
            category_id,
            occupants: 0,
        };
        state.channels.insert(channel.id, channel.clone());
        Ok(channel)
    }

    async fn grant_owner_permissions(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
    ) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_grant.clone() {
            return Err(err);
        }
        state.grants.push((channel_id, user_id));
        Ok(())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.deletes.push(channel_id);
        if let Some(err) = state.fail_delete.get(&channel_id).cloned() {
            return Err(err);
        }
        match state.channels.remove(&channel_id) {
            Some(_) => Ok(()),
            None => Err(PlatformError::NotFound("Unknown Channel".to_string())),
        }
    }

    async fn voice_channels(&self, guild_id: GuildId) -> Result<Vec<VoiceChannel>, PlatformError> {
        let state = self.state.lock().unwrap();
        if let Some(err) = state.fail_list.clone() {
            return Err(err);
        }
        let mut channels: Vec<VoiceChannel> = state
            .channels
            .values()
            .filter(|channel| channel.guild_id == guild_id)
            .cloned()
            .collect();
        channels.sort_by_key(|channel| channel.id.get());
        Ok(channels)
    }

    async fn move_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.moves.push((guild_id, user_id, channel_id));
        if let Some(err) = state.fail_move.clone() {
            return Err(err);
        }
        Self::relocate(&mut state, user_id, Some(channel_id));
        Ok(())
    }

    fn occupant_count(&self, _guild_id: GuildId, channel_id: ChannelId) -> usize {
        self.state
            .lock()
            .unwrap()
            .channels
            .get(&channel_id)
            .map(|channel| channel.occupants)
            .unwrap_or(0)
    }

    fn has_category(&self, guild_id: GuildId, category_id: ChannelId) -> bool {
        self.state
            .lock()
            .unwrap()
            .categories
            .contains(&(guild_id, category_id))
    }
}
