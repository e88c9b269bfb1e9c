use thiserror::Error;

/// Schema violation for an inbound payload.
///
/// Holds one message per violated rule. Displays as every message joined by a comma,
/// which is the text shown on the error page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .details.join(","))]
pub struct ValidationError {
    pub details: Vec<String>,
}

impl ValidationError {
    pub fn new(details: Vec<String>) -> Self {
        Self { details }
    }
}
