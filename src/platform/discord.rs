//! Serenity-backed implementation of `VoicePlatform`.
//!
//! Channel mutations go through Serenity's HTTP client. Reads (voice channel
//! listing, occupancy, category lookup) come from Serenity's cache, which holds
//! the guild channels and voice states received over the gateway. Passing the
//! cache alongside the HTTP client also lets Serenity reject requests the bot
//! lacks permissions for before they reach Discord.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, ChannelType, Context, CreateChannel, GuildId, PermissionOverwrite,
    PermissionOverwriteType, Permissions, UserId, VoiceState,
};
use serenity::async_trait;
use serenity::http::{Http, HttpError};
use serenity::model::ModelError;

use crate::{error::channel::PlatformError, model::VoiceChannel, platform::VoicePlatform};

/// Permissions granted to the member a temporary channel is created for.
pub fn owner_permissions() -> Permissions {
    Permissions::CONNECT | Permissions::SPEAK | Permissions::MANAGE_CHANNELS | Permissions::MOVE_MEMBERS
}

/// `VoicePlatform` over a Serenity HTTP client and cache.
///
/// Cheap to build per event from the handler's `Context`; both fields are
/// reference counted.
#[derive(Clone)]
pub struct SerenityPlatform {
    /// Discord HTTP client for channel and member requests
    http: Arc<Http>,
    /// Gateway cache holding guild channels and voice states
    cache: Arc<Cache>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }

    fn cache_http(&self) -> (&Arc<Cache>, &Http) {
        (&self.cache, &self.http)
    }
}

#[async_trait]
impl VoicePlatform for SerenityPlatform {
    async fn create_voice_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        category_id: Option<ChannelId>,
    ) -> Result<VoiceChannel, PlatformError> {
        let mut builder = CreateChannel::new(name).kind(ChannelType::Voice);
        if let Some(category_id) = category_id {
            builder = builder.category(category_id);
        }

        let channel = guild_id
            .create_channel(self.cache_http(), builder)
            .await
            .map_err(classify_error)?;

        Ok(VoiceChannel::from_guild_channel(&channel, 0))
    }

    async fn grant_owner_permissions(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
    ) -> Result<(), PlatformError> {
        let overwrite = PermissionOverwrite {
            allow: owner_permissions(),
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user_id),
        };

        channel_id
            .create_permission(&self.http, overwrite)
            .await
            .map_err(classify_error)
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), PlatformError> {
        channel_id
            .delete(self.cache_http())
            .await
            .map(|_| ())
            .map_err(classify_error)
    }

    async fn voice_channels(&self, guild_id: GuildId) -> Result<Vec<VoiceChannel>, PlatformError> {
        let guild = self
            .cache
            .guild(guild_id)
            .ok_or_else(|| PlatformError::Other(format!("Guild {} is not cached", guild_id)))?;

        let channels = guild
            .channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Voice)
            .map(|channel| {
                let occupants = count_occupants(&guild.voice_states, channel.id);
                VoiceChannel::from_guild_channel(channel, occupants)
            })
            .collect();

        Ok(channels)
    }

    async fn move_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError> {
        guild_id
            .move_member(self.cache_http(), user_id, channel_id)
            .await
            .map(|_| ())
            .map_err(classify_error)
    }

    fn occupant_count(&self, guild_id: GuildId, channel_id: ChannelId) -> usize {
        self.cache
            .guild(guild_id)
            .map(|guild| count_occupants(&guild.voice_states, channel_id))
            .unwrap_or(0)
    }

    fn has_category(&self, guild_id: GuildId, category_id: ChannelId) -> bool {
        self.cache
            .guild(guild_id)
            .and_then(|guild| {
                guild
                    .channels
                    .get(&category_id)
                    .map(|channel| channel.kind == ChannelType::Category)
            })
            .unwrap_or(false)
    }
}

/// Counts the cached voice states connected to `channel_id`.
pub fn count_occupants(voice_states: &HashMap<UserId, VoiceState>, channel_id: ChannelId) -> usize {
    voice_states
        .values()
        .filter(|state| state.channel_id == Some(channel_id))
        .count()
}

/// Classifies a Serenity error into a `PlatformError`.
///
/// HTTP 403 responses and Serenity's own cached permission checks are permission
/// failures, HTTP 404 responses are not-found. Everything else, including
/// gateway and rate limit errors, is unclassified.
pub fn classify_error(err: serenity::Error) -> PlatformError {
    match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            classify_status(response.status_code.as_u16(), err.to_string())
        }
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
            PlatformError::PermissionDenied(err.to_string())
        }
        _ => PlatformError::Other(err.to_string()),
    }
}

fn classify_status(status: u16, message: String) -> PlatformError {
    match status {
        403 => PlatformError::PermissionDenied(message),
        404 => PlatformError::NotFound(message),
        _ => PlatformError::Other(message),
    }
}
