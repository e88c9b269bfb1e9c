use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected input or behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a record ID from a path segment
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client, matching how the store treats an ID it cannot cast.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
