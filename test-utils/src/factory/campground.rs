//! Campground factory for creating test campground entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campgrounds with customizable fields.
///
/// Defaults come from `fixture::campground` with a unique title per factory so
/// multiple campgrounds in one test are distinguishable.
///
/// # Example
///
/// ```rust,ignore
/// let campground = CampgroundFactory::new(&db)
///     .title("Lakeside")
///     .price(12.0)
///     .build()
///     .await?;
/// ```
pub struct CampgroundFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::campground::Model,
}

impl<'a> CampgroundFactory<'a> {
    /// Creates a new CampgroundFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::campground::entity_builder()
            .title(format!("Campground {}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.entity.location = location.into();
        self
    }

    /// Builds and inserts the campground entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campground::Model)` - Created campground entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campground::Model, DbErr> {
        entity::campground::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            price: ActiveValue::Set(self.entity.price),
            description: ActiveValue::Set(self.entity.description),
            location: ActiveValue::Set(self.entity.location),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campground with default values.
///
/// Shorthand for `CampgroundFactory::new(db).build().await`.
pub async fn create_campground(
    db: &DatabaseConnection,
) -> Result<entity::campground::Model, DbErr> {
    CampgroundFactory::new(db).build().await
}
