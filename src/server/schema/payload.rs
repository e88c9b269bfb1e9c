//! Binding between request payload DTOs and the schema that guards them.

use serde::de::DeserializeOwned;

use crate::{
    model::{campground::CampgroundFormDto, review::ReviewFormDto},
    server::schema::SchemaName,
};

/// A payload type that may only be built from input that passed its schema.
///
/// The type deserializes from the normalized object returned by
/// [`validate`](super::validate), not from the raw request body.
pub trait SchemaPayload: DeserializeOwned {
    const SCHEMA: SchemaName;
}

impl SchemaPayload for CampgroundFormDto {
    const SCHEMA: SchemaName = SchemaName::Campground;
}

impl SchemaPayload for ReviewFormDto {
    const SCHEMA: SchemaName = SchemaName::Review;
}
