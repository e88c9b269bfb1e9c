pub use super::campground::Entity as Campground;
pub use super::campground_review::Entity as CampgroundReview;
pub use super::review::Entity as Review;
