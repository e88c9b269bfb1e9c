//! Schema-validating payload extractor.
//!
//! `Valid<T>` is the validation step of a route: axum runs extractors before the handler
//! body, so a rejected payload ends the request with a 400 before any store access.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use dioxus_logger::tracing;
use serde_json::Value;

use crate::server::{
    error::AppError,
    schema::{self, payload::SchemaPayload},
    util::form::parse_nested,
};

/// Extracts a request body that satisfies the schema of `T`.
///
/// JSON bodies (`Content-Type: application/json`) are parsed as-is; any other body is
/// decoded as a urlencoded form with bracket nesting. The decoded payload is validated
/// against `T::SCHEMA` and `T` is built from the normalized fields.
///
/// # Rejections
/// - `AppError::Validation` - The payload violates the schema (400)
/// - `AppError::BadRequest` - The body cannot be read or is not valid JSON (400)
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: SchemaPayload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let payload: Value = if is_json {
            serde_json::from_slice(&body)
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?
        } else {
            parse_nested(&body)
        };

        let fields = schema::validate(T::SCHEMA, &payload).inspect_err(|e| {
            tracing::debug!("Rejected {} payload: {}", T::SCHEMA, e);
        })?;

        let value = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            AppError::InternalError(format!(
                "Validated {} payload failed to deserialize: {}",
                T::SCHEMA,
                e
            ))
        })?;

        Ok(Valid(value))
    }
}
