use sea_orm::entity::prelude::*;

/// A past Bias-of-the-Week winner. Append-only; rows are never updated or
/// deleted once recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "botw_winner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub member_id: String,
    pub idol_group: String,
    pub idol_name: String,
    pub won_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
