//! Campground fixtures for creating in-memory test data.

use entity::campground;

/// Default test campground title.
pub const DEFAULT_TITLE: &str = "Misty Hollow";

/// Default nightly price.
pub const DEFAULT_PRICE: f64 = 18.5;

/// Default test campground description.
pub const DEFAULT_DESCRIPTION: &str = "Quiet sites beside a pine forest.";

/// Default test campground location.
pub const DEFAULT_LOCATION: &str = "Bend, Oregon";

/// Creates a campground entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Misty Hollow"`
/// - price: `18.5`
/// - description: `"Quiet sites beside a pine forest."`
/// - location: `"Bend, Oregon"`
///
/// # Returns
/// - `campground::Model` - In-memory campground entity
pub fn entity() -> campground::Model {
    entity_builder().build()
}

/// Creates a campground entity builder for customization.
///
/// # Returns
/// - `CampgroundEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> CampgroundEntityBuilder {
    CampgroundEntityBuilder::default()
}

/// Builder for creating customized campground entity models.
pub struct CampgroundEntityBuilder {
    id: i32,
    title: String,
    price: f64,
    description: String,
    location: String,
}

impl Default for CampgroundEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            price: DEFAULT_PRICE,
            description: DEFAULT_DESCRIPTION.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl CampgroundEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builds and returns the campground entity model.
    pub fn build(self) -> campground::Model {
        campground::Model {
            id: self.id,
            title: self.title,
            price: self.price,
            description: self.description,
            location: self.location,
        }
    }
}
