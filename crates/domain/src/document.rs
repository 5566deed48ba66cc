//! Documents returned by the generator API.
//!
//! The list endpoint returns whatever metadata the backend stored for each
//! generated file. The client keeps those values untouched and only offers a
//! typed view over the shape the backend currently writes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A document as returned by `GET /api/documents`.
///
/// Opaque to the client: it is stored and handed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(serde_json::Value);

impl Document {
    /// Wraps a raw JSON value.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the document and returns the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Decodes the backend metadata shape, if the value has it.
    #[must_use]
    pub fn metadata(&self) -> Option<DocumentMetadata> {
        DocumentMetadata::deserialize(&self.0).ok()
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Metadata the generator writes next to every produced `.docx` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Stored file name on the server (`<uuid>.docx`).
    pub doc_filename: String,
    /// Human readable file name offered on download.
    pub display_name: String,
    /// Document kind, e.g. "Письмо".
    pub document_type: String,
    /// Local creation time on the server.
    pub created_at: NaiveDateTime,
}

impl DocumentMetadata {
    /// Path segments of the endpoint that serves the generated file.
    ///
    /// The file name is one segment and must be percent-encoded as such,
    /// never pasted into a path string.
    #[must_use]
    pub fn download_segments(&self) -> [&str; 3] {
        ["api", "download", &self.doc_filename]
    }
}
