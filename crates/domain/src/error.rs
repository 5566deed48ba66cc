//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A route path pattern could not be parsed.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidRoutePattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two sibling routes declare the same path.
    #[error("duplicate route path among siblings: {0}")]
    DuplicateRoutePath(String),

    /// The top-level route list has no catch-all entry.
    #[error("route table has no top-level catch-all route")]
    MissingCatchAll,

    /// No route carries the requested name.
    #[error("unknown route name: {0}")]
    UnknownRouteName(String),

    /// The named route has dynamic segments and cannot be turned into a path.
    #[error("route `{0}` has dynamic segments")]
    DynamicRoutePath(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
