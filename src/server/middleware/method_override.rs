//! HTML form method override.
//!
//! Browsers submit forms only with GET or POST. A POST whose query string carries
//! `_method=PUT`, `_method=PATCH` or `_method=DELETE` is re-issued with that method. The
//! rewrite has to happen before routing, so it wraps the router as a whole rather than
//! being added with `Router::layer`.

use axum::http::{Method, Request};
use dioxus_logger::tracing;

/// Query parameter naming the intended method.
const OVERRIDE_PARAM: &str = "_method";

/// Rewrites the method of a POST request that asks for an override.
///
/// Requests that are not POST, carry no override, or name any other method pass through
/// unchanged.
pub fn method_override<B>(mut req: Request<B>) -> Request<B> {
    if req.method() != Method::POST {
        return req;
    }

    let Some(query) = req.uri().query() else {
        return req;
    };

    let method = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OVERRIDE_PARAM)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        });

    if let Some(method) = method {
        tracing::debug!("Overriding POST {} as {}", req.uri().path(), method);
        *req.method_mut() = method;
    }

    req
}
