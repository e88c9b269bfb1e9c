//! Review fixtures for creating in-memory test data.

use entity::review;

/// Default review rating.
pub const DEFAULT_RATING: i32 = 4;

/// Default review body.
pub const DEFAULT_BODY: &str = "Clean sites, friendly hosts.";

/// Creates a review entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - rating: `4`
/// - body: `"Clean sites, friendly hosts."`
pub fn entity() -> review::Model {
    entity_builder().build()
}

/// Creates a review entity builder for customization.
pub fn entity_builder() -> ReviewEntityBuilder {
    ReviewEntityBuilder::default()
}

/// Builder for creating customized review entity models.
pub struct ReviewEntityBuilder {
    id: i32,
    rating: i32,
    body: String,
}

impl Default for ReviewEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            rating: DEFAULT_RATING,
            body: DEFAULT_BODY.to_string(),
        }
    }
}

impl ReviewEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> review::Model {
        review::Model {
            id: self.id,
            rating: self.rating,
            body: self.body,
        }
    }
}
