//! Svetlana Domain - Core types
//!
//! This crate defines the domain model for the Svetlana document client.
//! All types here are pure Rust with no I/O dependencies.

pub mod document;
pub mod error;
pub mod route;
pub mod settings;
pub mod state;

pub use document::{Document, DocumentMetadata};
pub use error::{DomainError, DomainResult};
pub use route::{RouteEntry, RouteMatch, RouteParams, RouteTable, ViewKey, app_routes};
pub use settings::ClientSettings;
pub use state::{DocumentState, FETCH_DOCUMENTS_FAILED};
