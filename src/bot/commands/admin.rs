//! Privileged election commands.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use std::sync::Arc;

use crate::{
    bot::commands::{acknowledge, require_admin, require_owner},
    error::{botw::BotwError, AppError},
    model::{botw::BotwState, idol::Idol},
    service::{
        botw::BotwService,
        locks::GuildLocks,
        nomination::NominationService,
        transport::{ChatTransport, DiscordTransport},
    },
    util::parse::{parse_member_arg, parse_u64_from_string, parse_utc_date},
};

fn discord_transport(ctx: &Context) -> Arc<DiscordTransport> {
    Arc::new(DiscordTransport::new(ctx.http.clone()))
}

/// Removes a member's nomination. Admin only; without an argument the
/// admin's own nomination is cleared.
pub async fn clear_nomination(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let target = match rest.split_whitespace().next() {
        Some(arg) => parse_member_arg(arg)?,
        None => msg.author.id.get(),
    };

    let lock = locks.for_guild(guild_id);
    let removed = {
        let _guard = lock.lock().await;
        NominationService::new(db).clear(guild_id, target).await?
    };

    if removed {
        acknowledge(ctx, msg).await
    } else {
        msg.reply(&ctx.http, format!("<@{target}> has no nomination to clear."))
            .await?;
        Ok(())
    }
}

/// Forces an immediate winner pick. `winner silent` suppresses the
/// channel announcement.
pub async fn winner(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let silent = rest.split_whitespace().next() == Some("silent");
    let transport = discord_transport(ctx);
    let service = BotwService::new(db, transport.clone());

    let lock = locks.for_guild(guild_id);
    let (winner, outbound) = {
        let _guard = lock.lock().await;
        service.force_winner(guild_id, silent, Utc::now()).await?
    };
    service.deliver(outbound).await;

    let member_id = parse_u64_from_string(winner.member_id.clone())?;
    let nominator = match transport.member_name(guild_id, member_id).await {
        Ok(name) => name,
        Err(_) => format!("<@{member_id}>"),
    };

    msg.reply(
        &ctx.http,
        format!(
            "**{} {}** (nominated by {}) is the new Bias of the Week.",
            winner.idol_group, winner.idol_name, nominator
        ),
    )
    .await?;

    Ok(())
}

/// Toggles skipping the next announcement. Owner only.
pub async fn skip(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
) -> Result<(), AppError> {
    require_owner(ctx, msg)?;

    let service = BotwService::new(db, discord_transport(ctx));

    let lock = locks.for_guild(guild_id);
    let (state, outbound) = {
        let _guard = lock.lock().await;
        service.toggle_skip(guild_id).await?
    };
    service.deliver(outbound).await;

    let text = match state {
        BotwState::Skip => "The next pick will be skipped.",
        _ => "Skip cancelled; the next pick will run as scheduled.",
    };
    msg.reply(&ctx.http, text).await?;

    Ok(())
}

/// Back-fills a winner record: `addwinner <member> <YYYY-MM-DD> <group> <name>`.
pub async fn add_winner(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    require_admin(ctx, msg).await?;

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(BotwError::Validation(
            "Usage: `addwinner <member> <YYYY-MM-DD> <group> <name>`.".to_string(),
        )
        .into());
    }

    let member_id = parse_member_arg(tokens[0])?;
    let starting_day = parse_utc_date(tokens[1])?.date_naive();
    let (name, group) = tokens[2..].split_last().unwrap();
    let idol = Idol::new(group.join(" "), *name);

    let service = BotwService::new(db, discord_transport(ctx));

    let lock = locks.for_guild(guild_id);
    let record = {
        let _guard = lock.lock().await;
        service.add_past_winner(guild_id, member_id, starting_day, idol).await?
    };

    msg.reply(
        &ctx.http,
        format!(
            "Recorded **{} {}** as the winner announced {}.",
            record.idol_group,
            record.idol_name,
            record.won_at.format("%Y-%m-%d")
        ),
    )
    .await?;

    Ok(())
}
