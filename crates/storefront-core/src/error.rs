//! Storefront error types.
//!
//! Only the product source can fail. Cart and catalog operations are total
//! and report rejected actions through their return values instead.

use thiserror::Error;

/// Errors that can occur while fetching the catalog.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The catalog could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(String),

    /// The catalog payload was malformed.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// The source is not able to serve a catalog.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e.to_string())
    }
}
