use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;
use tracing::info;

use crate::{bot::handler::Handler, config::Config, error::AppError, service::locks::GuildLocks};

/// Builds the Discord bot client and exposes its HTTP handle.
///
/// The HTTP handle is shared with the tick scheduler so announcements and
/// role swaps go out over the same client.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
/// - `locks` - Per-guild locks shared with the tick scheduler
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    locks: GuildLocks,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the
    // Discord developer portal for the command front-end to see messages.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, locks, config.command_prefix.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This should be called from within a tokio::spawn task since it blocks
/// until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
