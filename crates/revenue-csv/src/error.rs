//! Error types for revenue-csv

/// Result type for revenue-csv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revenue-csv operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown CSV separator: {value}")]
    InvalidSeparator { value: String },
}
