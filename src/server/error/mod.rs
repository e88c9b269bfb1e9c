//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the normalization that turns
//! any failure into the uniform error page. `AppError` is the top-level error type; every
//! handler returns `Result<_, AppError>` so failures raised before or after an `.await`
//! reach `IntoResponse for AppError`, which resolves a status code and message and renders
//! the error view. Panics inside handlers are routed to the same page by
//! `middleware::catch_panic`.

pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{
    error::{config::ConfigError, internal::InternalError, validation::ValidationError},
    view,
};

/// Message shown whenever a failure carries no message of its own, or when its details
/// must not reach the client.
pub const DEFAULT_ERROR_MESSAGE: &str = "Oh No, Something Went Wrong!";

/// Top-level application error type.
///
/// Variants fall into three kinds that decide the response status:
/// - validation failures (`Validation`, `BadRequest`) → 400 Bad Request
/// - not-found failures (`NotFound`) → 404 Not Found
/// - everything else → 500 Internal Server Error
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload did not conform to its schema.
    ///
    /// Results in 400 Bad Request with every field violation joined by commas.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unexpected internal condition such as a malformed record ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error that is not a schema violation (unreadable body, etc.).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged but the
    /// default message is shown to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Resolves the HTTP status code for this error.
    ///
    /// # Returns
    /// - `400 Bad Request` - For `Validation` and `BadRequest`
    /// - `404 Not Found` - For `NotFound`
    /// - `500 Internal Server Error` - For every other variant
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Resolves the client-facing message for this error.
    ///
    /// Client errors expose their own message. Server errors expose only
    /// `DEFAULT_ERROR_MESSAGE`, as does any client error whose message is empty.
    pub fn message(&self) -> String {
        let message = match self {
            Self::Validation(err) => err.to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
            _ => String::new(),
        };

        if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Converts application errors into the rendered error page.
///
/// Server errors are logged with full details before the generic page is returned.
/// The response is terminal: status and body are produced once here.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        error_page(status, &self.message())
    }
}

/// Renders the shared error view with the given status and message.
///
/// Used by `AppError` and by the panic handler so both paths produce identical pages.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(view::error::render(status, message))).into_response()
}
