use serde::{Deserialize, Serialize};

/// Fields submitted by the campground create and edit forms.
///
/// Submitted nested under `campground`, e.g. `campground[title]=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampgroundFormDto {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
}
