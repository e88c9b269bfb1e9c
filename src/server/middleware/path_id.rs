//! Record ID path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::{error::AppError, util::parse::parse_i32_from_string};

/// Extracts the `{id}` path segment as a record ID.
///
/// # Rejections
/// - `AppError::BadRequest` - The segment cannot be decoded (invalid percent-encoding, etc.)
/// - `AppError::InternalErr(ParseStringId)` - The segment is not a record ID (500)
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(PathId(parse_i32_from_string(id)?))
    }
}
