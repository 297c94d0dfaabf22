use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::idol::Idol;

pub struct IdolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive catalog lookup via the lowercase key columns.
    pub async fn find(&self, idol: &Idol) -> Result<Option<entity::idol::Model>, DbErr> {
        let (group_key, name_key) = idol.key();

        entity::prelude::Idol::find()
            .filter(entity::idol::Column::GroupKey.eq(group_key))
            .filter(entity::idol::Column::NameKey.eq(name_key))
            .one(self.db)
            .await
    }

    /// Inserts an idol, preserving display casing and populating the
    /// lowercase key columns. Fails on the unique key index if the idol is
    /// already cataloged; use `find` first for idempotent insertion.
    pub async fn insert(&self, idol: &Idol) -> Result<entity::idol::Model, DbErr> {
        let (group_key, name_key) = idol.key();

        entity::idol::ActiveModel {
            group_name: ActiveValue::Set(idol.group.clone()),
            name: ActiveValue::Set(idol.name.clone()),
            group_key: ActiveValue::Set(group_key),
            name_key: ActiveValue::Set(name_key),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the whole catalog in insertion order.
    pub async fn get_all(&self) -> Result<Vec<entity::idol::Model>, DbErr> {
        entity::prelude::Idol::find()
            .order_by_asc(entity::idol::Column::Id)
            .all(self.db)
            .await
    }
}
