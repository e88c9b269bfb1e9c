use serde::{Deserialize, Serialize};

/// Fields submitted by the review form on a campground's page.
///
/// Submitted nested under `review`, e.g. `review[rating]=5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewFormDto {
    pub rating: i32,
    pub body: String,
}
