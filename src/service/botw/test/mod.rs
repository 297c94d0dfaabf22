use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use super::*;
use crate::service::transport::mock::{MockTransport, TransportCall};


const GUILD: u64 = 100;
const CHANNEL: u64 = 777;
const ROLE: u64 = 555;

/// 2026-01-05 is a Monday, the default announcement day.
const ANNOUNCEMENT_TICK: &str = "2026-01-05T00:00:00Z";
/// 2026-01-08 is a Thursday, the default winner day.
const WINNER_TICK: &str = "2026-01-08T00:00:00Z";

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

async fn setup() -> (TestContext, Arc<MockTransport>) {
    let test = TestBuilder::new().with_botw_tables().build().await.unwrap();

    (test, Arc::new(MockTransport::new()))
}

async fn guild_state(db: &DatabaseConnection) -> String {
    SettingsRepository::new(db)
        .get_or_create(GUILD)
        .await
        .unwrap()
        .state
}
