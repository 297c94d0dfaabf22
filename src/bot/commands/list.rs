//! The read-only `nominations` and `history` commands.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    data::winner::WinnerRepository, error::AppError, service::nomination::NominationService,
};

/// Lines per Discord message when listing.
const CHUNK_SIZE: usize = 10;

async fn send_chunked(
    ctx: &Context,
    msg: &Message,
    header: &str,
    lines: Vec<String>,
) -> Result<(), AppError> {
    let mut first = true;
    for chunk in lines.chunks(CHUNK_SIZE) {
        let mut text = String::new();
        if first {
            text.push_str(header);
            text.push('\n');
            first = false;
        }
        text.push_str(&chunk.join("\n"));
        msg.channel_id.say(&ctx.http, text).await?;
    }

    Ok(())
}

/// Lists the guild's current nominations, in nomination order.
pub async fn nominations(
    db: &DatabaseConnection,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
) -> Result<(), AppError> {
    let nominations = NominationService::new(db).list(guild_id).await?;

    if nominations.is_empty() {
        msg.reply(&ctx.http, "Nobody has nominated a bias yet.").await?;
        return Ok(());
    }

    let lines = nominations
        .iter()
        .map(|n| format!("**{} {}** — nominated by <@{}>", n.idol_group, n.idol_name, n.member_id))
        .collect();

    send_chunked(ctx, msg, "Current nominations:", lines).await
}

/// Lists the guild's winner history, newest first.
pub async fn history(
    db: &DatabaseConnection,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
) -> Result<(), AppError> {
    let winners = WinnerRepository::new(db).get_by_guild_desc(guild_id).await?;

    if winners.is_empty() {
        msg.reply(&ctx.http, "No Bias of the Week has been crowned yet.").await?;
        return Ok(());
    }

    let lines = winners
        .iter()
        .map(|w| {
            format!(
                "{} — **{} {}** (nominated by <@{}>)",
                w.won_at.format("%Y-%m-%d"),
                w.idol_group,
                w.idol_name,
                w.member_id
            )
        })
        .collect();

    send_chunked(ctx, msg, "Past Biases of the Week:", lines).await
}
