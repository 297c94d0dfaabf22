use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use crate::{
    error::AppError,
    service::{botw::BotwService, locks::GuildLocks, transport::ChatTransport},
    util::schedule::truncate_to_hour,
};

/// Starts the hourly election tick scheduler.
///
/// The job fires at the top of every hour and hands the hour boundary to
/// `BotwService::process_tick`, which decides per guild whether anything
/// is due. Firing on every hour (rather than only at midnight) keeps the
/// cron expression timezone-agnostic and costs one cheap settings scan.
///
/// # Arguments
/// - `db`: Database connection
/// - `transport`: Chat transport for announcements and role swaps
/// - `locks`: Per-guild locks shared with the command front-end
pub async fn start_scheduler(
    db: DatabaseConnection,
    transport: Arc<dyn ChatTransport>,
    locks: GuildLocks,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_transport = transport.clone();
    let job_locks = locks.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let transport = job_transport.clone();
        let locks = job_locks.clone();

        Box::pin(async move {
            let boundary = truncate_to_hour(Utc::now());
            BotwService::new(&db, transport).process_tick(&locks, boundary).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Election tick scheduler started");

    Ok(())
}

/// Replays the current hour's tick once at startup.
///
/// If the process was down when a boundary passed, the pending transition
/// runs now; if nothing was due, the state guards make this a no-op.
pub async fn catch_up(
    db: &DatabaseConnection,
    transport: Arc<dyn ChatTransport>,
    locks: &GuildLocks,
) {
    let boundary = truncate_to_hour(Utc::now());

    info!("Replaying tick for boundary {}", boundary);
    BotwService::new(db, transport).process_tick(locks, boundary).await;
}
