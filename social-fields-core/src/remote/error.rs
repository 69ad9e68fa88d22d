//! Errors from remote lookups

use thiserror::Error;

/// Errors that can occur during a remote lookup
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network/request error
    #[cfg(feature = "remote")]
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest client
    #[error("Transport error: {0}")]
    Transport(String),

    /// A previous attempt failed and the failure is still cached
    #[error("Remote lookup unavailable (cached failure)")]
    Unavailable,
}
