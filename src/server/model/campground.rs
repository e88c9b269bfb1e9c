//! Domain & parameter models for campground operations

use crate::{model::campground::CampgroundFormDto, server::model::review::Review};

/// The campground domain model
///
/// `reviews` holds the IDs of the reviews this campground references, in the order they
/// were added. Every ID refers to an existing review.
#[derive(Debug, Clone, PartialEq)]
pub struct Campground {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub reviews: Vec<i32>,
}

impl Campground {
    /// Converts an entity model and its ordered review references to the domain model
    ///
    /// # Arguments
    /// - `entity` - The campground entity model from the database
    /// - `reviews` - IDs of referenced reviews, ordered by position
    pub fn from_entity(entity: entity::campground::Model, reviews: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            price: entity.price,
            description: entity.description,
            location: entity.location,
            reviews,
        }
    }
}

/// A campground together with the review records it references, for the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundWithReviews {
    pub campground: Campground,
    pub reviews: Vec<Review>,
}

/// Parameters for creating a new campground
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCampgroundParams {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
}

impl CreateCampgroundParams {
    pub fn from_dto(dto: CampgroundFormDto) -> Self {
        Self {
            title: dto.title,
            price: dto.price,
            description: dto.description,
            location: dto.location,
        }
    }
}

/// Parameters for updating an existing campground
///
/// Replaces every scalar field. The review references are never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCampgroundParams {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
}

impl UpdateCampgroundParams {
    pub fn from_dto(dto: CampgroundFormDto) -> Self {
        Self {
            title: dto.title,
            price: dto.price,
            description: dto.description,
            location: dto.location,
        }
    }
}
