use crate::{data::settings::SettingsRepository, model::botw::BotwState};
use entity::prelude::GuildSettings;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_or_create;
mod update;
