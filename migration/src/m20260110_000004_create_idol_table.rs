use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Idol::Table)
                    .if_not_exists()
                    .col(pk_auto(Idol::Id))
                    .col(string(Idol::GroupName))
                    .col(string(Idol::Name))
                    .col(string(Idol::GroupKey))
                    .col(string(Idol::NameKey))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_idol_key_unique")
                            .col(Idol::GroupKey)
                            .col(Idol::NameKey),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Idol::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Idol {
    Table,
    Id,
    GroupName,
    Name,
    GroupKey,
    NameKey,
}
