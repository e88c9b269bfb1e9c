//! Panic handling for request handlers.
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer` so a handler that panics, before
//! or after an `.await`, still ends in the uniform error page instead of a dropped
//! connection.

use axum::{http::StatusCode, response::Response};
use dioxus_logger::tracing;
use std::any::Any;

use crate::server::error::{error_page, DEFAULT_ERROR_MESSAGE};

/// Converts a caught panic payload into a 500 error page.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Handler panicked: {}", detail);

    error_page(StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_ERROR_MESSAGE)
}
