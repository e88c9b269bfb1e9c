use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_campground_table::Campground;
use super::m20261019_000002_create_review_table::Review;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampgroundReview::Table)
                    .if_not_exists()
                    .col(pk_auto(CampgroundReview::Id))
                    .col(integer(CampgroundReview::CampgroundId))
                    .col(integer(CampgroundReview::ReviewId))
                    .col(integer(CampgroundReview::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campground_review_campground_id")
                            .from(CampgroundReview::Table, CampgroundReview::CampgroundId)
                            .to(Campground::Table, Campground::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Reviews outlive the campground that referenced them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campground_review_review_id")
                            .from(CampgroundReview::Table, CampgroundReview::ReviewId)
                            .to(Review::Table, Review::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_campground_review_unique")
                            .col(CampgroundReview::CampgroundId)
                            .col(CampgroundReview::ReviewId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampgroundReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampgroundReview {
    Table,
    Id,
    CampgroundId,
    ReviewId,
    Position,
}
