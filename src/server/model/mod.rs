//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and from
//! request DTOs at the controller boundary, keeping services independent of both the
//! database and the HTTP payload shapes.

pub mod campground;
pub mod review;
