//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default values
//! used by the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let campground = fixture::campground::entity();
//!
//! let cheap = fixture::campground::entity_builder()
//!     .price(0.0)
//!     .build();
//! ```

pub mod campground;
pub mod review;

pub use campground::{entity as campground_entity, entity_builder as campground_entity_builder};
pub use review::{entity as review_entity, entity_builder as review_entity_builder};
