//! Request processing that runs around or before handlers.
//!
//! - `validate` - `Valid<T>` extractor running a payload schema before the handler body
//! - `path_id` - `PathId` extractor turning the `{id}` segment into a record ID
//! - `method_override` - rewrites `POST ?_method=PUT|PATCH|DELETE` ahead of routing
//! - `catch_panic` - renders the error page for handlers that panic

pub mod catch_panic;
pub mod method_override;
pub mod path_id;
pub mod validate;
