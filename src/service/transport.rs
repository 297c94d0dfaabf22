//! Chat platform capability consumed by the election engine.
//!
//! The engine never talks to Discord directly; it goes through
//! `ChatTransport` so scheduled transitions and operator commands can be
//! tested against a recording mock. `DiscordTransport` is the production
//! implementation over serenity's HTTP client.

use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a message to a guild channel, returning the new message's ID.
    async fn send_channel(&self, channel_id: u64, text: &str) -> Result<u64, AppError>;

    /// Sends a direct message to a user.
    async fn send_direct(&self, user_id: u64, text: &str) -> Result<(), AppError>;

    /// Adds a role to a guild member. Succeeds if the member already has it.
    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Removes a role from a guild member. Succeeds if the member does not
    /// have it, or no longer exists.
    async fn remove_role(&self, guild_id: u64, user_id: u64, role_id: u64)
        -> Result<(), AppError>;

    /// Resolves a member's display name.
    async fn member_name(&self, guild_id: u64, user_id: u64) -> Result<String, AppError>;

    /// Resolves a role ID from its name, case-insensitively.
    async fn resolve_role_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, AppError>;
}

/// Production transport over the Discord HTTP API.
pub struct DiscordTransport {
    http: Arc<Http>,
}

impl DiscordTransport {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a Discord API error is a plain 404.
fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(resp))
            if resp.status_code.as_u16() == 404
    )
}

#[async_trait]
impl ChatTransport for DiscordTransport {
    async fn send_channel(&self, channel_id: u64, text: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id).say(&self.http, text).await?;

        Ok(message.id.get())
    }

    async fn send_direct(&self, user_id: u64, text: &str) -> Result<(), AppError> {
        let channel = UserId::new(user_id).create_dm_channel(&self.http).await?;
        channel.say(&self.http, text).await?;

        Ok(())
    }

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Bias of the Week winner"),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        let result = self
            .http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Bias of the Week handover"),
            )
            .await;

        match result {
            Ok(()) => Ok(()),
            // Member already lost the role or left the guild.
            Err(err) if is_not_found(&err) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn member_name(&self, guild_id: u64, user_id: u64) -> Result<String, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;

        Ok(member.display_name().to_string())
    }

    async fn resolve_role_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles
            .iter()
            .find(|role| role.name.eq_ignore_ascii_case(name))
            .map(|role| role.id.get()))
    }
}
