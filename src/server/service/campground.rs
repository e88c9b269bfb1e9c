use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{campground::CampgroundRepository, review::ReviewRepository},
    error::AppError,
    model::campground::{
        Campground, CampgroundWithReviews, CreateCampgroundParams, UpdateCampgroundParams,
    },
};

pub struct CampgroundService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampgroundService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every campground in insertion order
    pub async fn get_all(&self) -> Result<Vec<Campground>, AppError> {
        let campgrounds = CampgroundRepository::new(self.db).get_all().await?;

        Ok(campgrounds)
    }

    /// Gets a campground by ID
    /// Returns None if the campground doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Campground>, AppError> {
        let campground = CampgroundRepository::new(self.db).find_by_id(id).await?;

        Ok(campground)
    }

    /// Gets a campground by ID along with the review records it references
    /// Returns None if the campground doesn't exist
    pub async fn get_with_reviews(
        &self,
        id: i32,
    ) -> Result<Option<CampgroundWithReviews>, AppError> {
        let Some(campground) = CampgroundRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let reviews = ReviewRepository::new(self.db)
            .find_by_ids(&campground.reviews)
            .await?;

        Ok(Some(CampgroundWithReviews {
            campground,
            reviews,
        }))
    }

    /// Creates a new campground
    pub async fn create(&self, params: CreateCampgroundParams) -> Result<Campground, AppError> {
        let campground = CampgroundRepository::new(self.db).create(params).await?;

        tracing::info!("Created campground {} ({})", campground.id, campground.title);

        Ok(campground)
    }

    /// Replaces the scalar fields of a campground, keeping its review references
    /// Returns None if the campground doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCampgroundParams,
    ) -> Result<Option<Campground>, AppError> {
        let campground = CampgroundRepository::new(self.db).update(id, params).await?;

        if campground.is_some() {
            tracing::info!("Updated campground {}", id);
        }

        Ok(campground)
    }

    /// Deletes a campground and its review references; the reviews themselves remain
    /// Returns false if the campground doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = CampgroundRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted campground {}", id);
        }

        Ok(deleted)
    }
}
