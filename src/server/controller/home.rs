use axum::response::{Html, IntoResponse};

use crate::server::view::home::render_home;

/// Landing page.
pub async fn home() -> impl IntoResponse {
    Html(render_home())
}
