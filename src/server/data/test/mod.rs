mod campground;
mod review;
