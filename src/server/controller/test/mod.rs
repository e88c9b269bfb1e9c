use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    data::review::ReviewRepository, error::DEFAULT_ERROR_MESSAGE, router::app, state::AppState,
};


/// Status, `Location` header and body text of a finished response.
struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_campground_tables()
        .build()
        .await
        .unwrap()
}

/// Sends one request through the full application, method override included.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> TestResponse {
    let response = app(AppState::new(db.clone()))
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Browser-style form submission; forms only POST so other methods go through `_method`.
fn form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
