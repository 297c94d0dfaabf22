pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_guild_settings_table;
mod m20260110_000002_create_nomination_table;
mod m20260110_000003_create_botw_winner_table;
mod m20260110_000004_create_idol_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_guild_settings_table::Migration),
            Box::new(m20260110_000002_create_nomination_table::Migration),
            Box::new(m20260110_000003_create_botw_winner_table::Migration),
            Box::new(m20260110_000004_create_idol_table::Migration),
        ]
    }
}
