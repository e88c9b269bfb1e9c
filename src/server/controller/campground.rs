use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    model::campground::CampgroundFormDto,
    server::{
        error::AppError,
        middleware::{path_id::PathId, validate::Valid},
        model::campground::{CreateCampgroundParams, UpdateCampgroundParams},
        service::campground::CampgroundService,
        state::AppState,
        view::campground::{render_edit, render_index, render_new, render_show},
    },
};

const CAMPGROUND_NOT_FOUND: &str = "Campground not found";

/// List all campgrounds.
///
/// # Returns
/// - `200 OK` - Rendered campground list
/// - `500 Internal Server Error` - Database error
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campgrounds = CampgroundService::new(&state.db).get_all().await?;

    Ok(Html(render_index(&campgrounds)))
}

/// Form for a new campground. Touches no store.
pub async fn new_form() -> impl IntoResponse {
    Html(render_new())
}

/// Create a campground from a validated `campground` payload.
///
/// # Returns
/// - `303 See Other` - Redirect to the new campground's detail page
/// - `400 Bad Request` - Payload failed the campground schema; nothing is stored
/// - `500 Internal Server Error` - Database error
pub async fn create(
    State(state): State<AppState>,
    Valid(payload): Valid<CampgroundFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCampgroundParams::from_dto(payload);
    let campground = CampgroundService::new(&state.db).create(params).await?;

    Ok(Redirect::to(&format!("/campgrounds/{}", campground.id)))
}

/// Campground detail page with its reviews resolved.
///
/// # Returns
/// - `200 OK` - Rendered detail page
/// - `404 Not Found` - No campground has this ID
/// - `500 Internal Server Error` - Malformed ID or database error
pub async fn show(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let details = CampgroundService::new(&state.db)
        .get_with_reviews(id)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPGROUND_NOT_FOUND.to_string()))?;

    Ok(Html(render_show(&details)))
}

/// Edit form prefilled with the campground's current values.
///
/// # Returns
/// - `200 OK` - Rendered edit form
/// - `404 Not Found` - No campground has this ID
/// - `500 Internal Server Error` - Malformed ID or database error
pub async fn edit_form(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let campground = CampgroundService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPGROUND_NOT_FOUND.to_string()))?;

    Ok(Html(render_edit(&campground)))
}

/// Replace a campground's fields; its review references are kept.
///
/// # Returns
/// - `303 See Other` - Redirect to the campground's detail page
/// - `400 Bad Request` - Payload failed the campground schema; nothing is changed
/// - `404 Not Found` - No campground has this ID
/// - `500 Internal Server Error` - Malformed ID or database error
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    Valid(payload): Valid<CampgroundFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCampgroundParams::from_dto(payload);
    let campground = CampgroundService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPGROUND_NOT_FOUND.to_string()))?;

    Ok(Redirect::to(&format!("/campgrounds/{}", campground.id)))
}

/// Delete a campground. Deleting an absent ID is a no-op that still redirects.
///
/// # Returns
/// - `303 See Other` - Redirect to the campground list
/// - `500 Internal Server Error` - Malformed ID or database error
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    CampgroundService::new(&state.db).delete(id).await?;

    Ok(Redirect::to("/campgrounds"))
}
