//! Admin settings commands.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    bot::commands::{acknowledge, require_admin},
    data::settings::SettingsRepository,
    error::{botw::BotwError, AppError},
    service::{
        locks::GuildLocks,
        transport::{ChatTransport, DiscordTransport},
    },
    util::schedule::{parse_weekday, weekday_name},
};

/// Turns scheduled picks on or off for the guild.
pub async fn set_enabled(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    enabled: bool,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let lock = locks.for_guild(guild_id);
    {
        let _guard = lock.lock().await;
        let repo = SettingsRepository::new(db);
        let settings = repo.get_or_create(guild_id).await?;
        repo.set_enabled(settings, enabled).await?;
    }

    acknowledge(ctx, msg).await
}

/// Sets the winner day; the announcement day lands three days earlier in
/// the same week cycle.
pub async fn set_winner_day(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let arg = rest.split_whitespace().next().unwrap_or("");
    let winner_day = parse_weekday(arg).ok_or_else(|| {
        BotwError::Validation(format!("`{arg}` is not a weekday, e.g. `setwinnerday thursday`."))
    })?;
    let announcement_day = (winner_day + 4) % 7;

    let lock = locks.for_guild(guild_id);
    {
        let _guard = lock.lock().await;
        let repo = SettingsRepository::new(db);
        let settings = repo.get_or_create(guild_id).await?;
        repo.set_days(settings, announcement_day as i32, winner_day as i32).await?;
    }

    msg.reply(
        &ctx.http,
        format!(
            "Winners will be crowned on {}s; picks are announced on {}s.",
            weekday_name(winner_day),
            weekday_name(announcement_day)
        ),
    )
    .await?;

    Ok(())
}

/// Points the winner role at an existing guild role, resolved by name.
pub async fn set_role(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let name = rest.trim();
    if name.is_empty() {
        return Err(BotwError::Validation(
            "A role name is required, e.g. `setrole Bias of the Week`.".to_string(),
        )
        .into());
    }

    let transport = DiscordTransport::new(ctx.http.clone());
    let role_id = transport
        .resolve_role_by_name(guild_id, name)
        .await?
        .ok_or_else(|| BotwError::NotFound(format!("No role named `{name}` in this server.")))?;

    let lock = locks.for_guild(guild_id);
    {
        let _guard = lock.lock().await;
        let repo = SettingsRepository::new(db);
        let settings = repo.get_or_create(guild_id).await?;
        repo.set_winner_role(settings, role_id).await?;
    }

    acknowledge(ctx, msg).await
}

/// Restricts nominations to the current channel.
pub async fn set_nominations_channel(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let lock = locks.for_guild(guild_id);
    {
        let _guard = lock.lock().await;
        let repo = SettingsRepository::new(db);
        let settings = repo.get_or_create(guild_id).await?;
        repo.set_nominations_channel(settings, msg.channel_id.get()).await?;
    }

    acknowledge(ctx, msg).await
}

/// Sends future winner announcements to the current channel.
pub async fn set_announcement_channel(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let lock = locks.for_guild(guild_id);
    {
        let _guard = lock.lock().await;
        let repo = SettingsRepository::new(db);
        let settings = repo.get_or_create(guild_id).await?;
        repo.set_announcement_channel(settings, msg.channel_id.get()).await?;
    }

    acknowledge(ctx, msg).await
}
