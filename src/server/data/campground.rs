//! Campground data repository for database operations
//!
//! Provides the `CampgroundRepository` for managing campgrounds and the ordered list of
//! review references each campground holds.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::campground::{
    Campground, CreateCampgroundParams, UpdateCampgroundParams,
};

/// Repository providing database operations for campground management.
pub struct CampgroundRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampgroundRepository<'a, C> {
    /// Creates a new CampgroundRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every campground in insertion order, each with its review references
    ///
    /// # Returns
    /// - `Ok(Vec<Campground>)` - All campgrounds, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Campground>, DbErr> {
        let campgrounds = entity::prelude::Campground::find()
            .order_by_asc(entity::campground::Column::Id)
            .all(self.db)
            .await?;

        let links = entity::prelude::CampgroundReview::find()
            .order_by_asc(entity::campground_review::Column::Position)
            .all(self.db)
            .await?;

        let mut references: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            references
                .entry(link.campground_id)
                .or_default()
                .push(link.review_id);
        }

        Ok(campgrounds
            .into_iter()
            .map(|campground| {
                let reviews = references.remove(&campground.id).unwrap_or_default();
                Campground::from_entity(campground, reviews)
            })
            .collect())
    }

    /// Finds a campground by ID
    ///
    /// # Arguments
    /// - `id` - ID of the campground to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Campground))` - The campground with its review references
    /// - `Ok(None)` - No campground has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Campground>, DbErr> {
        let Some(campground) = entity::prelude::Campground::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let reviews = self.review_ids(id).await?;

        Ok(Some(Campground::from_entity(campground, reviews)))
    }

    /// Creates a new campground with no review references
    ///
    /// # Arguments
    /// - `params` - Scalar fields of the new campground
    ///
    /// # Returns
    /// - `Ok(Campground)` - The created campground including its store-generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCampgroundParams) -> Result<Campground, DbErr> {
        let campground = entity::campground::ActiveModel {
            title: ActiveValue::Set(params.title),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Campground::from_entity(campground, Vec::new()))
    }

    /// Replaces the scalar fields of an existing campground
    ///
    /// Review references are left untouched.
    ///
    /// # Arguments
    /// - `id` - ID of the campground to update
    /// - `params` - New scalar field values
    ///
    /// # Returns
    /// - `Ok(Some(Campground))` - The updated campground
    /// - `Ok(None)` - No campground has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCampgroundParams,
    ) -> Result<Option<Campground>, DbErr> {
        let Some(existing) = entity::prelude::Campground::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut campground = existing.into_active_model();
        campground.title = ActiveValue::Set(params.title);
        campground.price = ActiveValue::Set(params.price);
        campground.description = ActiveValue::Set(params.description);
        campground.location = ActiveValue::Set(params.location);

        let updated = campground.update(self.db).await?;
        let reviews = self.review_ids(id).await?;

        Ok(Some(Campground::from_entity(updated, reviews)))
    }

    /// Deletes the campground of the provided ID together with its review references
    ///
    /// The referenced review records themselves are kept.
    ///
    /// # Returns
    /// - `Ok(true)` - The campground existed and was deleted
    /// - `Ok(false)` - No campground has this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::CampgroundReview::delete_many()
            .filter(entity::campground_review::Column::CampgroundId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Campground::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Appends a review reference to the end of a campground's review list
    ///
    /// # Arguments
    /// - `campground_id` - Campground that owns the reference
    /// - `review_id` - Existing review to reference
    ///
    /// # Returns
    /// - `Ok(())` - Reference stored after every existing one
    /// - `Err(DbErr)` - Database error, including a foreign key violation when either
    ///   record does not exist
    pub async fn append_review(&self, campground_id: i32, review_id: i32) -> Result<(), DbErr> {
        let last = entity::prelude::CampgroundReview::find()
            .filter(entity::campground_review::Column::CampgroundId.eq(campground_id))
            .order_by_desc(entity::campground_review::Column::Position)
            .one(self.db)
            .await?;

        let position = last.map(|link| link.position + 1).unwrap_or(0);

        entity::campground_review::ActiveModel {
            campground_id: ActiveValue::Set(campground_id),
            review_id: ActiveValue::Set(review_id),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets the IDs of the reviews referenced by a campground, ordered by position
    pub async fn review_ids(&self, campground_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::CampgroundReview::find()
            .filter(entity::campground_review::Column::CampgroundId.eq(campground_id))
            .order_by_asc(entity::campground_review::Column::Position)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.review_id).collect())
    }
}
