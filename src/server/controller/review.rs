use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::{
    model::review::ReviewFormDto,
    server::{
        error::AppError,
        middleware::{path_id::PathId, validate::Valid},
        model::review::CreateReviewParams,
        service::review::ReviewService,
        state::AppState,
    },
};

/// Add a review to a campground.
///
/// The review is stored and its ID appended to the campground's reviews in one transaction.
///
/// # Returns
/// - `303 See Other` - Redirect to the campground's detail page
/// - `400 Bad Request` - Payload failed the review schema; nothing is stored
/// - `404 Not Found` - No campground has this ID; nothing is stored
/// - `500 Internal Server Error` - Malformed ID or database error
pub async fn create(
    State(state): State<AppState>,
    PathId(campground_id): PathId,
    Valid(payload): Valid<ReviewFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(payload);
    ReviewService::new(&state.db)
        .create(campground_id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Campground not found".to_string()))?;

    Ok(Redirect::to(&format!("/campgrounds/{}", campground_id)))
}
