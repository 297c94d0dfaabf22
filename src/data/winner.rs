use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::idol::Idol;

pub struct WinnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WinnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a winner record. The history is append-only; records are
    /// never updated or deleted.
    pub async fn append(
        &self,
        guild_id: u64,
        member_id: u64,
        idol: &Idol,
        won_at: DateTime<Utc>,
    ) -> Result<entity::botw_winner::Model, DbErr> {
        entity::botw_winner::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            member_id: ActiveValue::Set(member_id.to_string()),
            idol_group: ActiveValue::Set(idol.group.clone()),
            idol_name: ActiveValue::Set(idol.name.clone()),
            won_at: ActiveValue::Set(won_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a guild's full history, newest first. Ties on `won_at` (only
    /// possible via admin back-fill) are broken by most-recently-appended.
    pub async fn get_by_guild_desc(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::botw_winner::Model>, DbErr> {
        entity::prelude::BotwWinner::find()
            .filter(entity::botw_winner::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::botw_winner::Column::WonAt)
            .order_by_desc(entity::botw_winner::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the current and previous winner for a guild, in that order.
    pub async fn top_two(
        &self,
        guild_id: u64,
    ) -> Result<(Option<entity::botw_winner::Model>, Option<entity::botw_winner::Model>), DbErr>
    {
        let mut rows = entity::prelude::BotwWinner::find()
            .filter(entity::botw_winner::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::botw_winner::Column::WonAt)
            .order_by_desc(entity::botw_winner::Column::Id)
            .limit(2)
            .all(self.db)
            .await?
            .into_iter();

        Ok((rows.next(), rows.next()))
    }

    /// Gets winners recorded within the last `days` days, newest first.
    pub async fn recent_within(
        &self,
        guild_id: u64,
        days: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::botw_winner::Model>, DbErr> {
        let threshold = now - Duration::days(days);

        entity::prelude::BotwWinner::find()
            .filter(entity::botw_winner::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::botw_winner::Column::WonAt.gt(threshold))
            .order_by_desc(entity::botw_winner::Column::WonAt)
            .order_by_desc(entity::botw_winner::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether `idol` won in this guild within the last `days` days.
    pub async fn has_recent(
        &self,
        guild_id: u64,
        idol: &Idol,
        days: i64,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let recent = self.recent_within(guild_id, days, now).await?;

        Ok(recent.iter().any(|winner| &Idol::from(winner) == idol))
    }
}
