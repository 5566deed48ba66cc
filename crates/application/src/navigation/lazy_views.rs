//! Lazily loaded views.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use svetlana_domain::ViewKey;
use tokio::sync::OnceCell;

use crate::{ApplicationError, ApplicationResult};

type LoadFuture<V> = Pin<Box<dyn Future<Output = ApplicationResult<V>> + Send>>;
type Loader<V> = Box<dyn Fn() -> LoadFuture<V> + Send + Sync>;

struct Slot<V> {
    loader: Loader<V>,
    loaded: OnceCell<Arc<V>>,
}

/// Registry of view loaders.
///
/// A loader runs on the first request for its view and the result is kept
/// for the lifetime of the registry. A failed load is not cached; the next
/// request runs the loader again.
pub struct LazyViews<V> {
    slots: HashMap<ViewKey, Slot<V>>,
}

impl<V: Send + Sync + 'static> LazyViews<V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Registers the loader for `key`, replacing any previous one.
    #[must_use]
    pub fn register<F, Fut>(mut self, key: ViewKey, load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApplicationResult<V>> + Send + 'static,
    {
        let loader: Loader<V> = Box::new(move || -> LoadFuture<V> { Box::pin(load()) });
        self.slots.insert(
            key,
            Slot {
                loader,
                loaded: OnceCell::new(),
            },
        );
        self
    }

    /// Returns the view for `key`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ViewNotRegistered` if no loader exists for
    /// `key`, or whatever error the loader produced.
    pub async fn load(&self, key: ViewKey) -> ApplicationResult<Arc<V>> {
        let slot = self
            .slots
            .get(&key)
            .ok_or(ApplicationError::ViewNotRegistered(key))?;

        slot.loaded
            .get_or_try_init(|| async {
                tracing::debug!(view = %key, "loading view");
                (slot.loader)().await.map(Arc::new)
            })
            .await
            .cloned()
    }

    /// Returns true if the view has already been loaded.
    #[must_use]
    pub fn is_loaded(&self, key: ViewKey) -> bool {
        self.slots
            .get(&key)
            .is_some_and(|slot| slot.loaded.initialized())
    }
}

impl<V: Send + Sync + 'static> Default for LazyViews<V> {
    fn default() -> Self {
        Self::new()
    }
}
