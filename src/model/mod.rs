pub mod campground;
pub mod review;
