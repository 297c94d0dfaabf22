mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::{locks::GuildLocks, transport::DiscordTransport},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let locks = GuildLocks::new();

    info!("Starting Bias of the Week bot");

    let (client, discord_http) = bot::start::init_bot(&config, db.clone(), locks.clone()).await?;
    let transport = Arc::new(DiscordTransport::new(discord_http));

    // Run any tick that fell into the current hour while the process was
    // down, then hand off to the hourly scheduler.
    scheduler::catch_up(&db, transport.clone(), &locks).await;
    scheduler::start_scheduler(db, transport, locks).await?;

    // The bot runs in the foreground; this returns only on shutdown.
    if let Err(e) = bot::start::start_bot(client).await {
        error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
