use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitCounter::Table)
                    .if_not_exists()
                    .col(integer(VisitCounter::Id).primary_key())
                    .col(string(VisitCounter::Month))
                    .col(integer(VisitCounter::Year))
                    .col(big_integer(VisitCounter::Views).default(0))
                    .col(timestamp(VisitCounter::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisitCounter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VisitCounter {
    Table,
    Id,
    Month,
    Year,
    Views,
    UpdatedAt,
}
