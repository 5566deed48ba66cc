//! Navigator: resolves locations and loads the views they render.

use std::sync::Arc;

use svetlana_domain::{RouteMatch, RouteTable};
use tokio::sync::watch;

use crate::ApplicationResult;
use crate::navigation::LazyViews;

/// Outcome of a successful navigation.
#[derive(Debug)]
pub struct Navigation<V> {
    /// The resolved route.
    pub route: RouteMatch,
    /// Loaded views of the route, outermost first.
    pub views: Vec<Arc<V>>,
}

impl<V> Navigation<V> {
    /// The innermost loaded view.
    #[must_use]
    pub fn page(&self) -> Option<&Arc<V>> {
        self.views.last()
    }
}

/// Combines the route table with the lazy view registry and tracks the
/// current route.
pub struct Navigator<V> {
    routes: RouteTable,
    views: LazyViews<V>,
    current: watch::Sender<Option<RouteMatch>>,
}

impl<V: Send + Sync + 'static> Navigator<V> {
    /// Creates a navigator with no current route.
    #[must_use]
    pub fn new(routes: RouteTable, views: LazyViews<V>) -> Self {
        Self {
            routes,
            views,
            current: watch::Sender::new(None),
        }
    }

    /// Navigates to `location`.
    ///
    /// The current route only changes once every view of the new route has
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns the first view loading error.
    pub async fn navigate(&self, location: &str) -> ApplicationResult<Navigation<V>> {
        let route = self.routes.resolve(location);
        tracing::info!(
            path = %route.path,
            name = route.name.as_deref().unwrap_or("-"),
            "navigating"
        );

        let mut views = Vec::with_capacity(route.views.len());
        for key in &route.views {
            views.push(self.views.load(*key).await?);
        }

        self.current.send_replace(Some(route.clone()));
        Ok(Navigation { route, views })
    }

    /// Navigates to the route called `name`.
    ///
    /// # Errors
    ///
    /// Returns a domain error for unknown or dynamic route names, otherwise
    /// the same errors as [`Navigator::navigate`].
    pub async fn navigate_to_name(&self, name: &str) -> ApplicationResult<Navigation<V>> {
        let path = self.routes.path_for(name)?;
        self.navigate(&path).await
    }

    /// The last route navigated to successfully.
    #[must_use]
    pub fn current(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }

    /// Subscribes to route changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<RouteMatch>> {
        self.current.subscribe()
    }

    /// The underlying route table.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }
}
