//! `SeaORM` entity models for the campground store.

pub mod prelude;

pub mod campground;
pub mod campground_review;
pub mod review;
