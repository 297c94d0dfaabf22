//! Message event handler: the command front-end.
//!
//! Recognizes `<prefix>biasoftheweek <command> ...` (alias `botw`) in guild
//! channels and routes the command to `bot::commands`. Domain errors are
//! replied to the author; everything else gets a generic apology and a log
//! line.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use tracing::error;

use crate::{bot::commands, service::locks::GuildLocks};

/// Splits off the first whitespace-delimited token, keeping the rest of
/// the text (including line breaks) intact for payload commands.
fn split_token(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start_matches(' ')),
        None => (text, ""),
    }
}

/// Handles message creation in a channel
pub async fn handle_message(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    prefix: &str,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    // Commands only work in guild channels, not DMs
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(content) = message.content.strip_prefix(prefix) else {
        return;
    };

    let (root, rest) = split_token(content.trim_start());
    if root != "biasoftheweek" && root != "botw" {
        return;
    }
    let (command, rest) = split_token(rest);

    if let Err(e) =
        commands::dispatch(db, locks, &ctx, &message, guild_id.get(), command, rest).await
    {
        error!(
            "Command '{}' failed in guild {} for user {}: {}",
            command, guild_id, message.author.id, e
        );

        if let Err(e) = message.reply(&ctx.http, e.user_message()).await {
            error!("Failed to send error reply: {}", e);
        }
    }
}
