//! Guild settings factory for creating test settings rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings with customizable fields.
///
/// Defaults mirror a freshly configured guild with scheduled picks enabled:
/// announcements on Monday (0), winners on Thursday (3), a 28-day
/// renomination cooldown and no role or channels configured.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id(100)
///     .state("WINNER_CHOSEN")
///     .winner_role_id(Some(555))
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    enabled: bool,
    state: String,
    announcement_day: i32,
    winner_day: i32,
    renomination_cooldown_days: i32,
    winner_role_id: Option<String>,
    nominations_channel_id: Option<String>,
    announcement_channel_id: Option<String>,
}

impl<'a> GuildSettingsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            enabled: true,
            state: "DEFAULT".to_string(),
            announcement_day: 0,
            winner_day: 3,
            renomination_cooldown_days: 28,
            winner_role_id: None,
            nominations_channel_id: None,
            announcement_channel_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn days(mut self, announcement_day: i32, winner_day: i32) -> Self {
        self.announcement_day = announcement_day;
        self.winner_day = winner_day;
        self
    }

    pub fn cooldown_days(mut self, days: i32) -> Self {
        self.renomination_cooldown_days = days;
        self
    }

    pub fn winner_role_id(mut self, role_id: Option<u64>) -> Self {
        self.winner_role_id = role_id.map(|id| id.to_string());
        self
    }

    pub fn nominations_channel_id(mut self, channel_id: Option<u64>) -> Self {
        self.nominations_channel_id = channel_id.map(|id| id.to_string());
        self
    }

    pub fn announcement_channel_id(mut self, channel_id: Option<u64>) -> Self {
        self.announcement_channel_id = channel_id.map(|id| id.to_string());
        self
    }

    /// Builds and inserts the settings row into the database.
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            enabled: ActiveValue::Set(self.enabled),
            state: ActiveValue::Set(self.state),
            announcement_day: ActiveValue::Set(self.announcement_day),
            winner_day: ActiveValue::Set(self.winner_day),
            renomination_cooldown_days: ActiveValue::Set(self.renomination_cooldown_days),
            winner_role_id: ActiveValue::Set(self.winner_role_id),
            nominations_channel_id: ActiveValue::Set(self.nominations_channel_id),
            announcement_channel_id: ActiveValue::Set(self.announcement_channel_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates enabled guild settings with default days for the given guild.
pub async fn create_settings(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).guild_id(guild_id).build().await
}
