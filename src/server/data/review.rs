//! Review data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::review::{CreateReviewParams, Review};

/// Repository providing database operations for reviews.
///
/// Reviews are stored independently; linking a review to a campground is done through
/// `CampgroundRepository::append_review`.
pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new review
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review including its store-generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            rating: ActiveValue::Set(params.rating),
            body: ActiveValue::Set(params.body),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    /// Gets the reviews with the provided IDs, in the order the IDs are given
    ///
    /// IDs with no matching review are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Review>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut reviews: HashMap<i32, entity::review::Model> = entity::prelude::Review::find()
            .filter(entity::review::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|review| (review.id, review))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| reviews.remove(id))
            .map(Review::from_entity)
            .collect())
    }

    /// Counts every stored review, whether or not a campground references it
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find().count(self.db).await
    }
}
