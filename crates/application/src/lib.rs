//! Svetlana Application - Stores, navigation and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The document store consumed by the UI
//! - Route navigation with lazily loaded views
//! - Application-level error handling

pub mod error;
pub mod navigation;
pub mod ports;
pub mod store;

pub use error::{ApplicationError, ApplicationResult};
pub use navigation::{LazyViews, Navigation, Navigator};
pub use ports::DocumentApi;
pub use store::DocumentStore;
