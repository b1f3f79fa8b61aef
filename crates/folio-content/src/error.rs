//! Content layer error types.

use folio_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while fetching or mapping content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The content store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error description or response body.
        message: String,
    },

    /// The content store returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// An asset source could not be turned into a URL.
    #[error("asset error: {0}")]
    Asset(String),

    /// The client configuration is incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
