//! The `load` command: batch catalog import.
//!
//! The payload is an attached text file or the message text after the
//! command, one idol per line. Ambiguous lines are resolved through a
//! numbered reply prompt.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};
use serenity::async_trait;

use crate::{
    bot::commands::{await_reply, require_owner},
    error::{botw::BotwError, AppError},
    model::idol::Idol,
    service::catalog::{CatalogPrompt, CatalogService},
};

/// Resolves ambiguous catalog lines by asking the invoking owner to pick a
/// split from a numbered list.
struct ReplyPrompt<'a> {
    ctx: &'a Context,
    msg: &'a Message,
}

#[async_trait]
impl CatalogPrompt for ReplyPrompt<'_> {
    async fn choose_split(&self, line: &str, options: &[Idol]) -> Option<usize> {
        let mut text = format!("How should `{line}` be split? Reply with a number:\n");
        for (index, option) in options.iter().enumerate() {
            text.push_str(&format!("{}) **{}** — {}\n", index + 1, option.group, option.name));
        }

        if self.msg.reply(&self.ctx.http, text).await.is_err() {
            return None;
        }

        let reply = await_reply(self.ctx, self.msg).await?;
        let choice: usize = reply.content.trim().parse().ok()?;

        (1..=options.len()).contains(&choice).then(|| choice - 1)
    }
}

/// Strips a surrounding Markdown code fence, if any.
fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    inner
        .strip_suffix("```")
        .map(|inner| inner.split_once('\n').map(|(_, body)| body).unwrap_or(""))
        .unwrap_or(trimmed)
}

/// Loads catalog lines from an attachment or the message body. Owner only.
pub async fn load(
    db: &DatabaseConnection,
    ctx: &Context,
    msg: &Message,
    rest: &str,
) -> Result<(), AppError> {
    require_owner(ctx, msg)?;

    let payload = match msg.attachments.first() {
        Some(attachment) => {
            let bytes = attachment.download().await?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None => strip_code_fence(rest).to_string(),
    };

    if payload.trim().is_empty() {
        return Err(BotwError::Validation(
            "Attach a text file or paste idol lines after the command.".to_string(),
        )
        .into());
    }

    let prompt = ReplyPrompt { ctx, msg };
    let report = CatalogService::new(db).load(payload.lines(), &prompt).await?;

    msg.reply(
        &ctx.http,
        format!(
            "Catalog load finished: {} added, {} already known, {} discarded.",
            report.added, report.known, report.discarded
        ),
    )
    .await?;

    Ok(())
}
