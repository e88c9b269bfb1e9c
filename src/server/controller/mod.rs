//! HTTP request handlers.
//!
//! Controllers parse path IDs, receive schema-validated payloads through `Valid<T>`,
//! convert DTOs into service parameters and render views or redirects. Every handler
//! returns `Result<_, AppError>` so failures reach the error page.

pub mod campground;
pub mod fallback;
pub mod home;
pub mod review;

#[cfg(test)]
mod test;
