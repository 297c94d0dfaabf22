use sea_orm::entity::prelude::*;

/// A member's current nomination within a guild.
///
/// At most one row exists per `(guild_id, member_id)` pair, enforced by a
/// unique index. Idol uniqueness within a guild is case-insensitive and
/// enforced at the service layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nomination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub member_id: String,
    pub idol_group: String,
    pub idol_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
