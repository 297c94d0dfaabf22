//! Operator command surface.
//!
//! Every command runs under the invoking guild's lock for the duration of
//! its state mutation, and only there: confirmation prompts and other chat
//! round-trips happen outside the lock so a slow reply never stalls the
//! scheduler.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use serenity::collector::MessageCollector;
use std::time::Duration;

use crate::{
    error::{botw::BotwError, AppError},
    service::locks::GuildLocks,
};

pub mod admin;
pub mod list;
pub mod load;
pub mod nominate;
pub mod settings;

/// How long confirmation prompts wait for a reply.
const PROMPT_TIMEOUT: Duration = Duration::from_secs(60);

const HELP_TEXT: &str = "Available commands: `nominate <group> <name>`, `nominations`, \
    `history`, `clearnomination [member]`, `winner [silent]`, `skip`, \
    `addwinner <member> <YYYY-MM-DD> <group> <name>`, `load`, `enable`, `disable`, \
    `setwinnerday <weekday>`, `setrole <name>`, `setnominationschannel`, \
    `setannouncementchannel`";

/// Routes a parsed command to its handler.
///
/// # Arguments
/// - `rest` - Argument text after the command token, line breaks preserved
pub async fn dispatch(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    command: &str,
    rest: &str,
) -> Result<(), AppError> {
    match command {
        "nominate" => nominate::nominate(db, locks, ctx, msg, guild_id, rest).await,
        "nominations" => list::nominations(db, ctx, msg, guild_id).await,
        "history" => list::history(db, ctx, msg, guild_id).await,
        "clearnomination" => admin::clear_nomination(db, locks, ctx, msg, guild_id, rest).await,
        "winner" => admin::winner(db, locks, ctx, msg, guild_id, rest).await,
        "skip" => admin::skip(db, locks, ctx, msg, guild_id).await,
        "addwinner" => admin::add_winner(db, locks, ctx, msg, guild_id, rest).await,
        "load" => load::load(db, ctx, msg, rest).await,
        "enable" => settings::set_enabled(db, locks, ctx, msg, guild_id, true).await,
        "disable" => settings::set_enabled(db, locks, ctx, msg, guild_id, false).await,
        "setwinnerday" => settings::set_winner_day(db, locks, ctx, msg, guild_id, rest).await,
        "setrole" => settings::set_role(db, locks, ctx, msg, guild_id, rest).await,
        "setnominationschannel" => {
            settings::set_nominations_channel(db, locks, ctx, msg, guild_id).await
        }
        "setannouncementchannel" => {
            settings::set_announcement_channel(db, locks, ctx, msg, guild_id).await
        }
        _ => {
            msg.reply(&ctx.http, HELP_TEXT).await?;
            Ok(())
        }
    }
}

/// Whether the author may run admin commands: guild owner, administrator,
/// or a member with Manage Guild.
pub async fn member_is_admin(ctx: &Context, msg: &Message) -> Result<bool, AppError> {
    let Some(guild_id) = msg.guild_id else {
        return Ok(false);
    };

    // Cached guild reference must be dropped before the await below.
    let (owner_id, guild) = match msg.guild(&ctx.cache) {
        Some(guild) => (guild.owner_id, guild.clone()),
        None => return Ok(false),
    };

    if msg.author.id == owner_id {
        return Ok(true);
    }

    let member = ctx.http.get_member(guild_id, msg.author.id).await?;
    let permissions = guild.member_permissions(&member);

    Ok(permissions.administrator() || permissions.manage_guild())
}

/// Whether the author owns the guild.
pub fn is_owner(ctx: &Context, msg: &Message) -> bool {
    msg.guild(&ctx.cache)
        .map(|guild| guild.owner_id == msg.author.id)
        .unwrap_or(false)
}

/// Errors with `Forbidden` unless the author is an admin.
pub async fn require_admin(ctx: &Context, msg: &Message) -> Result<(), AppError> {
    if member_is_admin(ctx, msg).await? {
        Ok(())
    } else {
        Err(BotwError::Forbidden.into())
    }
}

/// Errors with `Forbidden` unless the author owns the guild.
pub fn require_owner(ctx: &Context, msg: &Message) -> Result<(), AppError> {
    if is_owner(ctx, msg) {
        Ok(())
    } else {
        Err(BotwError::Forbidden.into())
    }
}

/// Waits for the author's next message in the command channel.
pub async fn await_reply(ctx: &Context, msg: &Message) -> Option<Message> {
    MessageCollector::new(&ctx.shard)
        .author_id(msg.author.id)
        .channel_id(msg.channel_id)
        .timeout(PROMPT_TIMEOUT)
        .next()
        .await
}

/// Asks a yes/no question and waits for the reply.
///
/// # Returns
/// - `Ok(Some(true))` - The author answered yes
/// - `Ok(Some(false))` - The author answered anything else
/// - `Ok(None)` - No reply within the timeout
pub async fn confirm(ctx: &Context, msg: &Message, question: &str) -> Result<Option<bool>, AppError> {
    msg.reply(&ctx.http, format!("{question} (yes/no)")).await?;

    let Some(reply) = await_reply(ctx, msg).await else {
        return Ok(None);
    };

    let answer = reply.content.trim().to_lowercase();
    Ok(Some(answer == "yes" || answer == "y"))
}

/// Acknowledges a command with a checkmark reaction.
pub async fn acknowledge(ctx: &Context, msg: &Message) -> Result<(), AppError> {
    msg.react(&ctx.http, '✅').await?;

    Ok(())
}
