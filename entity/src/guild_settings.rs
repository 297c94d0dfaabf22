use sea_orm::entity::prelude::*;

/// Per-guild Bias-of-the-Week configuration and election state.
///
/// One row per guild, created lazily with defaults on first access.
/// `state` holds the serialized election state (`DEFAULT`, `WINNER_CHOSEN`
/// or `SKIP`). Weekdays use the ISO convention, 0=Monday through 6=Sunday.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub enabled: bool,
    pub state: String,
    pub announcement_day: i32,
    pub winner_day: i32,
    pub renomination_cooldown_days: i32,
    pub winner_role_id: Option<String>,
    pub nominations_channel_id: Option<String>,
    pub announcement_channel_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
