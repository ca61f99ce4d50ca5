//! Error types for exchange_listing

use thiserror::Error;

/// Unified error type for exchange_listing operations
#[derive(Error, Debug)]
pub enum ListingError {
    /// Page size or page number is not a valid integer
    #[error("Invalid numeric parameter {name}: {value:?}")]
    InvalidNumericParameter { name: &'static str, value: String },

    /// Page size of 0 when computing total pages
    #[error("Page size must be greater than zero")]
    DivisionByZero,

    /// Listing path does not match `sort-{type}/.../results-{size}.{page}.json`
    #[error("Malformed listing path: {0}")]
    MalformedPath(String),

    /// Path or query string could not be extracted from the request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unknown value for the `price` query parameter
    #[error("Invalid price filter: {0:?} (expected \"free\" or \"paid\")")]
    InvalidPriceFilter(String),

    /// Failed to read the card data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the card data file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ListingError {
    /// True for errors caused by a malformed request (as opposed to startup failures)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ListingError::Io(_) | ListingError::Parse(_))
    }
}

/// Result alias for exchange_listing operations
pub type Result<T> = std::result::Result<T, ListingError>;
