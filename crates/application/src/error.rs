//! Application error types

use svetlana_domain::{DomainError, ViewKey};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP request could not be sent or completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The operation timed out.
    #[error("operation timed out")]
    Timeout,

    /// No loader is registered for the view.
    #[error("no loader registered for view {0}")]
    ViewNotRegistered(ViewKey),

    /// A view loader failed.
    #[error("failed to load view {view}: {message}")]
    ViewLoad {
        /// The view being loaded.
        view: ViewKey,
        /// Loader error message.
        message: String,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
