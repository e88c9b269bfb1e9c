//! Review factory for creating test review entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The review is inserted on its own; use `helpers::link_review` to attach it to a
/// campground.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::review::Model,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::review::entity(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.entity.rating = rating;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.entity.body = body.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            rating: ActiveValue::Set(self.entity.rating),
            body: ActiveValue::Set(self.entity.body),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(db: &DatabaseConnection) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db).build().await
}
