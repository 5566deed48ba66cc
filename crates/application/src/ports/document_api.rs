//! Document API port

use std::future::Future;

use svetlana_domain::Document;

use crate::ApplicationResult;

/// Port for the generator service's read endpoints.
///
/// This trait abstracts the HTTP transport, allowing the store to be
/// exercised against scripted implementations in tests.
pub trait DocumentApi: Send + Sync {
    /// Lists generated documents (`GET /api/documents`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, non-success statuses, or a
    /// body that is not a JSON array.
    fn list_documents(&self) -> impl Future<Output = ApplicationResult<Vec<Document>>> + Send;

    /// Lists available template file names (`GET /api/templates`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DocumentApi::list_documents`].
    fn list_templates(&self) -> impl Future<Output = ApplicationResult<Vec<String>>> + Send;
}
