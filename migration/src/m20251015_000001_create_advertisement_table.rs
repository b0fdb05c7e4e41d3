use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advertisement::Table)
                    .if_not_exists()
                    .col(pk_auto(Advertisement::Id))
                    .col(string(Advertisement::CompanyName))
                    .col(string(Advertisement::Slogan))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advertisement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Advertisement {
    Table,
    Id,
    CompanyName,
    Slogan,
}
