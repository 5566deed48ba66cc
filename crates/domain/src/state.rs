//! Document list state for UI binding.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Message shown to the user whenever the document list cannot be loaded.
pub const FETCH_DOCUMENTS_FAILED: &str = "Не удалось загрузить документы";

/// State of the document list as observed by the UI.
///
/// - `documents`: last successfully fetched list, replaced wholesale
/// - `loading`: true while a fetch is in flight
/// - `error`: user-facing message of the last failed fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentState {
    /// Documents from the last successful fetch.
    pub documents: Vec<Document>,
    /// Whether a fetch is in progress.
    pub loading: bool,
    /// Error message of the last failed fetch.
    pub error: Option<String>,
}

impl DocumentState {
    /// Creates the initial, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Marks the start of a fetch.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Commits a successful fetch.
    pub fn commit(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    /// Records a failed fetch. Documents are left as they were.
    pub fn fail(&mut self) {
        self.error = Some(FETCH_DOCUMENTS_FAILED.to_string());
    }

    /// Marks the end of a fetch, whatever its outcome.
    pub fn end_fetch(&mut self) {
        self.loading = false;
    }
}
