use crate::{data::nomination::NominationRepository, model::idol::Idol};
use entity::prelude::Nomination;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guild;
mod get_by_member;
mod replace;
