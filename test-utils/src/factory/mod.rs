//! Factory methods for creating test data.
//!
//! Factories insert entities into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let campground = factory::create_campground(&db).await?;
//! let review = factory::create_review(&db).await?;
//!
//! let (campground, reviews) =
//!     factory::helpers::create_campground_with_reviews(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let campground = factory::campground::CampgroundFactory::new(&db)
//!     .title("Lakeside")
//!     .price(12.0)
//!     .build()
//!     .await?;
//! ```

pub mod campground;
pub mod helpers;
pub mod review;

pub use campground::create_campground;
pub use review::create_review;
