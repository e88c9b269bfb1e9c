use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campground::Table)
                    .if_not_exists()
                    .col(pk_auto(Campground::Id))
                    .col(string(Campground::Title))
                    .col(double(Campground::Price))
                    .col(text(Campground::Description))
                    .col(string(Campground::Location))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campground::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campground {
    Table,
    Id,
    Title,
    Price,
    Description,
    Location,
}
