//! The `nominate` command.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    bot::commands::confirm,
    data::settings::SettingsRepository,
    error::{botw::BotwError, AppError},
    model::{botw::NominateOutcome, idol::Idol},
    service::{locks::GuildLocks, nomination::NominationService},
    util::parse::parse_u64_from_string,
};

/// Parses `<group...> <name>`: the last token is the idol's name, everything
/// before it the group. Groups are often multi-word, names rarely are.
fn parse_idol_arg(rest: &str) -> Result<Idol, AppError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    if tokens.len() < 2 {
        return Err(BotwError::Validation(
            "Both a group and a name are required, e.g. `nominate Aespa Karina`.".to_string(),
        )
        .into());
    }

    let (name, group) = tokens.split_last().unwrap();
    Ok(Idol::new(group.join(" "), *name))
}

/// Nominates an idol for the invoking member, walking them through fuzzy
/// and override confirmations.
///
/// The guild lock is held only around each service call, never across a
/// confirmation prompt, so a member pondering a suggestion cannot stall
/// ticks or other members' commands.
pub async fn nominate(
    db: &DatabaseConnection,
    locks: &GuildLocks,
    ctx: &Context,
    msg: &Message,
    guild_id: u64,
    rest: &str,
) -> Result<(), AppError> {
    let settings = SettingsRepository::new(db).get_or_create(guild_id).await?;
    if let Some(channel) = &settings.nominations_channel_id {
        let channel_id = parse_u64_from_string(channel.clone())?;
        if msg.channel_id.get() != channel_id {
            msg.reply(
                &ctx.http,
                format!("Nominations are only accepted in <#{channel_id}>."),
            )
            .await?;
            return Ok(());
        }
    }

    let mut idol = parse_idol_arg(rest)?;
    let member_id = msg.author.id.get();
    let service = NominationService::new(db);
    let lock = locks.for_guild(guild_id);

    let mut accept_as_is = false;
    loop {
        let outcome = {
            let _guard = lock.lock().await;
            service.nominate(guild_id, member_id, idol.clone(), accept_as_is).await?
        };

        match outcome {
            NominateOutcome::Added(idol) => {
                msg.reply(&ctx.http, format!("**{idol}** is nominated. Good luck!"))
                    .await?;
                return Ok(());
            }
            NominateOutcome::SuggestMatch { candidate } => {
                let question = format!("Did you mean **{candidate}**?");
                match confirm(ctx, msg, &question).await? {
                    Some(true) => idol = candidate,
                    Some(false) => {}
                    None => {
                        msg.reply(&ctx.http, "No reply; nomination cancelled.").await?;
                        return Ok(());
                    }
                }
                accept_as_is = true;
            }
            NominateOutcome::RequiresOverride { current } => {
                let question =
                    format!("You already nominated **{current}**. Replace it with **{idol}**?");
                match confirm(ctx, msg, &question).await? {
                    Some(true) => {
                        let replaced = {
                            let _guard = lock.lock().await;
                            service.override_nomination(guild_id, member_id, idol.clone()).await?
                        };
                        msg.reply(
                            &ctx.http,
                            format!(
                                "Your nomination is now **{} {}**.",
                                replaced.idol_group, replaced.idol_name
                            ),
                        )
                        .await?;
                    }
                    Some(false) => {
                        msg.reply(&ctx.http, format!("Keeping **{current}**.")).await?;
                    }
                    None => {
                        msg.reply(&ctx.http, "No reply; keeping your current nomination.")
                            .await?;
                    }
                }
                return Ok(());
            }
        }
    }
}
