use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSettings::Id))
                    .col(string_uniq(GuildSettings::GuildId))
                    .col(boolean(GuildSettings::Enabled).default(false))
                    .col(string(GuildSettings::State).default("DEFAULT"))
                    .col(integer(GuildSettings::AnnouncementDay).default(0))
                    .col(integer(GuildSettings::WinnerDay).default(3))
                    .col(integer(GuildSettings::RenominationCooldownDays).default(28))
                    .col(string_null(GuildSettings::WinnerRoleId))
                    .col(string_null(GuildSettings::NominationsChannelId))
                    .col(string_null(GuildSettings::AnnouncementChannelId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    Id,
    GuildId,
    Enabled,
    State,
    AnnouncementDay,
    WinnerDay,
    RenominationCooldownDays,
    WinnerRoleId,
    NominationsChannelId,
    AnnouncementChannelId,
}
