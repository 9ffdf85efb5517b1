//! Typed errors for the 80app library.
//!
//! Almost every helper degrades to an empty sentinel on bad input, so the
//! error surface is deliberately small: a pattern that cannot be compiled,
//! and failures coming out of a caller-supplied app.

use thiserror::Error;

/// Errors raised by the normalization helpers.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The search pattern handed to the number extractor is not a valid regex
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while running a caller-supplied app over a page.
#[derive(Debug, Error)]
pub enum AppError {
    /// The app's document processor failed
    #[error("process_document failed for {url}: {source}")]
    ProcessDocument {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The app's link parser failed
    #[error("parse_links failed for {url}: {source}")]
    ParseLinks {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, AppError>;
