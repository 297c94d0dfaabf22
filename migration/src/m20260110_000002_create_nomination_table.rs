use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nomination::Table)
                    .if_not_exists()
                    .col(pk_auto(Nomination::Id))
                    .col(string(Nomination::GuildId))
                    .col(string(Nomination::MemberId))
                    .col(string(Nomination::IdolGroup))
                    .col(string(Nomination::IdolName))
                    .col(timestamp_with_time_zone(Nomination::CreatedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_nomination_guild_member_unique")
                            .col(Nomination::GuildId)
                            .col(Nomination::MemberId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nomination::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Nomination {
    Table,
    Id,
    GuildId,
    MemberId,
    IdolGroup,
    IdolName,
    CreatedAt,
}
