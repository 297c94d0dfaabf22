use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use super::*;
use crate::{data::nomination::NominationRepository, model::botw::NominateOutcome};


const GUILD: u64 = 100;

async fn setup() -> TestContext {
    TestBuilder::new().with_botw_tables().build().await.unwrap()
}
