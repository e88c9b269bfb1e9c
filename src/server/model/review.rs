//! Domain & parameter models for review operations

use crate::model::review::ReviewFormDto;

/// The review domain model
///
/// A review has no reference back to a campground; ownership is held by the campground's
/// list of review IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub rating: i32,
    pub body: String,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            rating: entity.rating,
            body: entity.body,
        }
    }
}

/// Parameters for creating a new review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReviewParams {
    pub rating: i32,
    pub body: String,
}

impl CreateReviewParams {
    pub fn from_dto(dto: ReviewFormDto) -> Self {
        Self {
            rating: dto.rating,
            body: dto.body,
        }
    }
}
