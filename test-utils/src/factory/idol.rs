//! Idol catalog factory for creating test catalog rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catalog idols.
///
/// The lowercase lookup keys are always derived from the display values at
/// build time, matching how the application inserts catalog rows.
pub struct IdolFactory<'a> {
    db: &'a DatabaseConnection,
    group_name: String,
    name: String,
}

impl<'a> IdolFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            group_name: format!("Group {}", id),
            name: format!("Idol {}", id),
        }
    }

    pub fn idol(mut self, group: impl Into<String>, name: impl Into<String>) -> Self {
        self.group_name = group.into();
        self.name = name.into();
        self
    }

    /// Builds and inserts the catalog row into the database.
    pub async fn build(self) -> Result<entity::idol::Model, DbErr> {
        entity::idol::ActiveModel {
            group_key: ActiveValue::Set(self.group_name.to_lowercase()),
            name_key: ActiveValue::Set(self.name.to_lowercase()),
            group_name: ActiveValue::Set(self.group_name),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog idol with the given display values.
pub async fn create_idol(
    db: &DatabaseConnection,
    group: &str,
    name: &str,
) -> Result<entity::idol::Model, DbErr> {
    IdolFactory::new(db).idol(group, name).build().await
}
