use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{campground::CampgroundRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review and appends it to a campground's reviews
    ///
    /// The review is inserted first so its ID exists, then the reference is appended to the
    /// campground. Both writes commit together; if either fails nothing is stored.
    ///
    /// Returns None, without writing anything, if the campground doesn't exist
    pub async fn create(
        &self,
        campground_id: i32,
        params: CreateReviewParams,
    ) -> Result<Option<Review>, AppError> {
        let txn = self.db.begin().await?;

        if CampgroundRepository::new(&txn)
            .find_by_id(campground_id)
            .await?
            .is_none()
        {
            txn.rollback().await?;
            return Ok(None);
        }

        let review = ReviewRepository::new(&txn).create(params).await?;
        CampgroundRepository::new(&txn)
            .append_review(campground_id, review.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Added review {} to campground {}", review.id, campground_id);

        Ok(Some(review))
    }
}
