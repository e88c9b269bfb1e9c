use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use tower::{
    util::{MapRequest, MapRequestLayer},
    Layer,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::server::{
    controller::{campground, fallback::not_found, home::home, review},
    middleware::{catch_panic::handle_panic, method_override::method_override},
    state::AppState,
};

/// The servable application: the router behind the method override rewrite.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Route table. Any unmatched path or method falls through to the not-found handler.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route(
            "/campgrounds",
            get(campground::index).post(campground::create),
        )
        .route("/campgrounds/new", get(campground::new_form))
        .route(
            "/campgrounds/{id}",
            get(campground::show)
                .put(campground::update)
                .patch(campground::update)
                .delete(campground::delete),
        )
        .route("/campgrounds/{id}/edit", get(campground::edit_form))
        .route("/campgrounds/{id}/reviews", post(review::create))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Builds the full application around the route table.
///
/// Method override runs outside the router so a rewritten request is routed by its new
/// method. Panics in handlers are converted to the 500 error page.
pub fn app(state: AppState) -> App {
    let router = router()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    MapRequestLayer::new(method_override::<Body> as fn(Request) -> Request).layer(router)
}
