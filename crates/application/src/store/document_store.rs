//! Document Store
//!
//! Holds the document list shown by the history page together with its
//! loading and error flags. The state lives in a `watch` channel so UI code
//! can either read a snapshot or subscribe to changes.

use std::sync::Arc;

use svetlana_domain::{Document, DocumentState, FETCH_DOCUMENTS_FAILED};
use tokio::sync::watch;

use crate::ports::DocumentApi;

/// State container for the generated-documents list.
///
/// Created once at application start and shared by `Arc` with every consumer.
///
/// # Example
///
/// ```ignore
/// let store = DocumentStore::new(Arc::new(ReqwestDocumentApi::new(&settings)?));
/// store.fetch_documents().await;
/// println!("{} documents", store.document_count());
/// ```
pub struct DocumentStore<A: DocumentApi> {
    api: Arc<A>,
    state: watch::Sender<DocumentState>,
}

impl<A: DocumentApi> DocumentStore<A> {
    /// Creates a store with empty state.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: watch::Sender::new(DocumentState::new()),
        }
    }

    /// Fetches the document list and updates the state.
    ///
    /// Never fails: a failure is reported through [`DocumentStore::error`]
    /// and the previous documents are kept. `loading` is reset on every exit
    /// path, including when this future is dropped before completion.
    ///
    /// Overlapping calls are not coordinated; whichever finishes last
    /// decides the final documents and error.
    pub async fn fetch_documents(&self) {
        tracing::debug!("fetching documents");
        self.state.send_modify(DocumentState::begin_fetch);
        let _loading = scopeguard::guard((), |()| {
            self.state.send_modify(DocumentState::end_fetch);
        });

        match self.api.list_documents().await {
            Ok(documents) => {
                tracing::info!(count = documents.len(), "documents loaded");
                self.state.send_modify(|state| state.commit(documents));
            }
            Err(error) => {
                tracing::error!(%error, "{FETCH_DOCUMENTS_FAILED}");
                self.state.send_modify(DocumentState::fail);
            }
        }
    }

    /// Returns a copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> DocumentState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DocumentState> {
        self.state.subscribe()
    }

    /// Documents from the last successful fetch.
    #[must_use]
    pub fn documents(&self) -> Vec<Document> {
        self.state.borrow().documents.clone()
    }

    /// Number of documents currently held.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.state.borrow().document_count()
    }

    /// Whether a fetch is in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// User-facing message of the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }
}
