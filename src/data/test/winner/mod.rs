use crate::{data::winner::WinnerRepository, model::idol::Idol};
use chrono::{DateTime, Utc};
use entity::prelude::BotwWinner;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_desc;
mod has_recent;
mod top_two;

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}
