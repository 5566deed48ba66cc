//! UI-facing state stores.

mod document_store;

pub use document_store::DocumentStore;
