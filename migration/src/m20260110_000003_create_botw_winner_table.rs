use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotwWinner::Table)
                    .if_not_exists()
                    .col(pk_auto(BotwWinner::Id))
                    .col(string(BotwWinner::GuildId))
                    .col(string(BotwWinner::MemberId))
                    .col(string(BotwWinner::IdolGroup))
                    .col(string(BotwWinner::IdolName))
                    .col(timestamp_with_time_zone(BotwWinner::WonAt))
                    .index(
                        Index::create()
                            .name("idx_botw_winner_guild_won_at")
                            .col(BotwWinner::GuildId)
                            .col(BotwWinner::WonAt),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotwWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotwWinner {
    Table,
    Id,
    GuildId,
    MemberId,
    IdolGroup,
    IdolName,
    WonAt,
}
