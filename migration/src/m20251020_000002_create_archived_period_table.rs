use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArchivedPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(ArchivedPeriod::Id))
                    .col(string(ArchivedPeriod::Month))
                    .col(integer(ArchivedPeriod::Year))
                    .col(big_integer(ArchivedPeriod::Views))
                    .col(timestamp(ArchivedPeriod::ArchivedAt))
                    .to_owned(),
            )
            .await?;

        // One archive row per calendar month
        manager
            .create_index(
                Index::create()
                    .name("idx_archived_period_year_month")
                    .table(ArchivedPeriod::Table)
                    .col(ArchivedPeriod::Year)
                    .col(ArchivedPeriod::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_archived_period_year_month")
                    .table(ArchivedPeriod::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArchivedPeriod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ArchivedPeriod {
    Table,
    Id,
    Month,
    Year,
    Views,
    ArchivedAt,
}
