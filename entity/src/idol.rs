use sea_orm::entity::prelude::*;

/// A cataloged idol, identified case-insensitively by its `(group, name)`
/// pair. `group_name` and `name` keep the display casing; `group_key` and
/// `name_key` hold the lowercase forms backing the unique index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "idol")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_name: String,
    pub name: String,
    pub group_key: String,
    pub name_key: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
