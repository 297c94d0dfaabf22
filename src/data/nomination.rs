use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::idol::Idol;

pub struct NominationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NominationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new nomination for a member.
    ///
    /// The caller is responsible for the one-per-member rule; a second
    /// insert for the same `(guild, member)` pair violates the unique index.
    pub async fn create(
        &self,
        guild_id: u64,
        member_id: u64,
        idol: &Idol,
    ) -> Result<entity::nomination::Model, DbErr> {
        entity::nomination::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            member_id: ActiveValue::Set(member_id.to_string()),
            idol_group: ActiveValue::Set(idol.group.clone()),
            idol_name: ActiveValue::Set(idol.name.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces the idol of an existing nomination in place, keeping the
    /// original insertion timestamp.
    pub async fn replace(
        &self,
        existing: entity::nomination::Model,
        idol: &Idol,
    ) -> Result<entity::nomination::Model, DbErr> {
        let mut active: entity::nomination::ActiveModel = existing.into();
        active.idol_group = ActiveValue::Set(idol.group.clone());
        active.idol_name = ActiveValue::Set(idol.name.clone());

        active.update(self.db).await
    }

    /// Gets all nominations for a guild in insertion order.
    pub async fn get_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::nomination::Model>, DbErr> {
        entity::prelude::Nomination::find()
            .filter(entity::nomination::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::nomination::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a member's current nomination in a guild, if any.
    pub async fn get_by_member(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<entity::nomination::Model>, DbErr> {
        entity::prelude::Nomination::find()
            .filter(entity::nomination::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::nomination::Column::MemberId.eq(member_id.to_string()))
            .one(self.db)
            .await
    }

    /// Gets every nomination across all guilds, in insertion order. Used to
    /// build the fuzzy-match candidate pool.
    pub async fn get_all(&self) -> Result<Vec<entity::nomination::Model>, DbErr> {
        entity::prelude::Nomination::find()
            .order_by_asc(entity::nomination::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a member's nomination.
    ///
    /// # Returns
    /// - `Ok(true)` - A nomination existed and was removed
    /// - `Ok(false)` - The member had no nomination (no-op)
    pub async fn delete(&self, guild_id: u64, member_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Nomination::delete_many()
            .filter(entity::nomination::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::nomination::Column::MemberId.eq(member_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
