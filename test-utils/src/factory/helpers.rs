//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links an existing review to a campground at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `campground_id` - Campground owning the reference
/// - `review_id` - Review being referenced
/// - `position` - Position of the reference within the campground's reviews
///
/// # Returns
/// - `Ok(entity::campground_review::Model)` - Created reference row
/// - `Err(DbErr)` - Database error during insert
pub async fn link_review(
    db: &DatabaseConnection,
    campground_id: i32,
    review_id: i32,
    position: i32,
) -> Result<entity::campground_review::Model, DbErr> {
    entity::campground_review::ActiveModel {
        id: ActiveValue::NotSet,
        campground_id: ActiveValue::Set(campground_id),
        review_id: ActiveValue::Set(review_id),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Creates a campground that references `count` freshly created reviews.
///
/// Reviews are linked in creation order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of reviews to create and link
///
/// # Returns
/// - `Ok((campground, reviews))` - Created campground and its reviews in order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_campground_with_reviews(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::campground::Model, Vec<entity::review::Model>), DbErr> {
    let campground = crate::factory::campground::create_campground(db).await?;

    let mut reviews = Vec::with_capacity(count);
    for position in 0..count {
        let review = crate::factory::review::create_review(db).await?;
        link_review(db, campground.id, review.id, position as i32).await?;
        reviews.push(review);
    }

    Ok((campground, reviews))
}
