use crate::{data::idol::IdolRepository, model::idol::Idol as IdolValue};
use entity::prelude::Idol;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod insert;
