use crate::server::error::AppError;

/// Catch-all for any method and path the route table does not match.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
