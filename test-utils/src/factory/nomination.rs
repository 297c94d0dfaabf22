//! Nomination factory for creating test nomination rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test nominations with customizable fields.
///
/// Defaults:
/// - guild_id / member_id: auto-incremented unique IDs
/// - idol: `"Group {id}"` / `"Idol {id}"`
/// - created_at: now
pub struct NominationFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    member_id: String,
    idol_group: String,
    idol_name: String,
    created_at: DateTime<Utc>,
}

impl<'a> NominationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            member_id: next_id().to_string(),
            idol_group: format!("Group {}", id),
            idol_name: format!("Idol {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    pub fn member_id(mut self, member_id: u64) -> Self {
        self.member_id = member_id.to_string();
        self
    }

    pub fn idol(mut self, group: impl Into<String>, name: impl Into<String>) -> Self {
        self.idol_group = group.into();
        self.idol_name = name.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the nomination into the database.
    pub async fn build(self) -> Result<entity::nomination::Model, DbErr> {
        entity::nomination::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            member_id: ActiveValue::Set(self.member_id),
            idol_group: ActiveValue::Set(self.idol_group),
            idol_name: ActiveValue::Set(self.idol_name),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a nomination with a unique default idol.
pub async fn create_nomination(
    db: &DatabaseConnection,
    guild_id: u64,
    member_id: u64,
) -> Result<entity::nomination::Model, DbErr> {
    NominationFactory::new(db)
        .guild_id(guild_id)
        .member_id(member_id)
        .build()
        .await
}
