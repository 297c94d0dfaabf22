use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::botw::BotwState;

/// Default renomination cooldown, in days.
pub const DEFAULT_COOLDOWN_DAYS: i32 = 28;
/// Default announcement day: Monday (ISO index 0).
pub const DEFAULT_ANNOUNCEMENT_DAY: i32 = 0;
/// Default winner day: Thursday (ISO index 3).
pub const DEFAULT_WINNER_DAY: i32 = 3;

pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings, lazily creating the row with defaults on
    /// first access. The row is never destroyed afterwards.
    pub async fn get_or_create(
        &self,
        guild_id: u64,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let existing = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            enabled: ActiveValue::Set(false),
            state: ActiveValue::Set(BotwState::Default.as_str().to_string()),
            announcement_day: ActiveValue::Set(DEFAULT_ANNOUNCEMENT_DAY),
            winner_day: ActiveValue::Set(DEFAULT_WINNER_DAY),
            renomination_cooldown_days: ActiveValue::Set(DEFAULT_COOLDOWN_DAYS),
            winner_role_id: ActiveValue::Set(None),
            nominations_channel_id: ActiveValue::Set(None),
            announcement_channel_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every guild's settings row. Drives the hourly tick loop.
    pub async fn get_all(&self) -> Result<Vec<entity::guild_settings::Model>, DbErr> {
        entity::prelude::GuildSettings::find().all(self.db).await
    }

    /// Writes the guild's election state through to storage.
    pub async fn set_state(
        &self,
        settings: entity::guild_settings::Model,
        state: BotwState,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.state = ActiveValue::Set(state.as_str().to_string());

        active.update(self.db).await
    }

    pub async fn set_enabled(
        &self,
        settings: entity::guild_settings::Model,
        enabled: bool,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.enabled = ActiveValue::Set(enabled);

        active.update(self.db).await
    }

    /// Sets both election weekdays. The caller validates the ISO range and
    /// the `announcement_day != winner_day` invariant.
    pub async fn set_days(
        &self,
        settings: entity::guild_settings::Model,
        announcement_day: i32,
        winner_day: i32,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.announcement_day = ActiveValue::Set(announcement_day);
        active.winner_day = ActiveValue::Set(winner_day);

        active.update(self.db).await
    }

    pub async fn set_winner_role(
        &self,
        settings: entity::guild_settings::Model,
        role_id: u64,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.winner_role_id = ActiveValue::Set(Some(role_id.to_string()));

        active.update(self.db).await
    }

    pub async fn set_nominations_channel(
        &self,
        settings: entity::guild_settings::Model,
        channel_id: u64,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.nominations_channel_id = ActiveValue::Set(Some(channel_id.to_string()));

        active.update(self.db).await
    }

    pub async fn set_announcement_channel(
        &self,
        settings: entity::guild_settings::Model,
        channel_id: u64,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut active: entity::guild_settings::ActiveModel = settings.into();
        active.announcement_channel_id = ActiveValue::Set(Some(channel_id.to_string()));

        active.update(self.db).await
    }
}
