//! Route table and path resolution.

use std::collections::HashSet;
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::route::pattern::{PathPattern, RouteParams, split_path};

/// Views a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKey {
    /// Shell layout hosting the main pages.
    MainLayout,
    /// Form for generating a new document.
    CreateDocumentPage,
    /// List of generated documents.
    HistoryPage,
    /// Available document templates.
    TemplatesPage,
    /// Client settings.
    SettingsPage,
    /// Fallback for unknown locations.
    ErrorNotFound,
}

impl ViewKey {
    /// Returns the view's identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainLayout => "MainLayout",
            Self::CreateDocumentPage => "CreateDocumentPage",
            Self::HistoryPage => "HistoryPage",
            Self::TemplatesPage => "TemplatesPage",
            Self::SettingsPage => "SettingsPage",
            Self::ErrorNotFound => "ErrorNotFound",
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative route entry, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern, relative to the parent unless it starts with `/`.
    pub path: String,
    /// Optional route name used for navigation by name.
    pub name: Option<String>,
    /// View rendered for this entry.
    pub view: ViewKey,
    /// Nested routes rendered inside this entry's view.
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Creates an unnamed entry without children.
    #[must_use]
    pub fn new(path: impl Into<String>, view: ViewKey) -> Self {
        Self {
            path: path.into(),
            name: None,
            view,
            children: Vec::new(),
        }
    }

    /// Sets the route name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the nested routes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

/// A flattened, matchable route with its full pattern and view chain.
#[derive(Debug, Clone)]
struct RouteRecord {
    pattern: PathPattern,
    name: Option<String>,
    views: Vec<ViewKey>,
}

impl RouteRecord {
    /// Declared at the top level, i.e. not nested under another entry.
    fn is_top_level(&self) -> bool {
        self.views.len() == 1
    }

    fn to_match(&self, segments: &[&str], params: RouteParams) -> RouteMatch {
        RouteMatch {
            name: self.name.clone(),
            path: format!("/{}", segments.join("/")),
            views: self.views.clone(),
            params,
        }
    }
}

/// Result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the matched route, if it has one.
    pub name: Option<String>,
    /// Normalized requested path.
    pub path: String,
    /// Views to render, outermost first.
    pub views: Vec<ViewKey>,
    /// Captured parameters.
    pub params: RouteParams,
}

impl RouteMatch {
    /// The innermost view, i.e. the page itself.
    #[must_use]
    pub fn page(&self) -> Option<ViewKey> {
        self.views.last().copied()
    }
}

/// Immutable route table.
///
/// Resolution is first-match-wins over the declared order, children before
/// their parent. Catch-all routes are only tried once every other route has
/// failed, so a fallback never shadows a more specific route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    fallback: usize,
}

impl RouteTable {
    /// Builds a table from top-level entries.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidRoutePattern` if a path does not parse
    /// - `DomainError::DuplicateRoutePath` if two siblings share a path
    /// - `DomainError::MissingCatchAll` if no top-level route matches every
    ///   path; a catch-all nested under a layout does not count
    pub fn new(entries: Vec<RouteEntry>) -> DomainResult<Self> {
        let root = PathPattern::parse("/")?;
        let mut records = Vec::new();
        Self::flatten(&entries, &root, &[], &mut records)?;

        let fallback = records
            .iter()
            .position(|r| r.is_top_level() && r.pattern.matches_everything())
            .ok_or(DomainError::MissingCatchAll)?;

        Ok(Self { records, fallback })
    }

    fn flatten(
        entries: &[RouteEntry],
        parent: &PathPattern,
        parent_views: &[ViewKey],
        out: &mut Vec<RouteRecord>,
    ) -> DomainResult<()> {
        let mut seen = HashSet::new();

        for entry in entries {
            let pattern = PathPattern::join(parent, &entry.path)?;
            if !seen.insert(pattern.to_string().to_lowercase()) {
                return Err(DomainError::DuplicateRoutePath(pattern.to_string()));
            }

            let mut views = parent_views.to_vec();
            views.push(entry.view);

            Self::flatten(&entry.children, &pattern, &views, out)?;

            out.push(RouteRecord {
                pattern,
                name: entry.name.clone(),
                views,
            });
        }

        Ok(())
    }

    /// Resolves a location (path, optionally with query or fragment).
    #[must_use]
    pub fn resolve(&self, location: &str) -> RouteMatch {
        let segments = split_path(location);

        let specific = self.records.iter().filter(|r| !r.pattern.is_catch_all());
        let fallbacks = self.records.iter().filter(|r| r.pattern.is_catch_all());

        specific
            .chain(fallbacks)
            .find_map(|r| {
                r.pattern
                    .matches(&segments)
                    .map(|params| r.to_match(&segments, params))
            })
            .unwrap_or_else(|| {
                let record = &self.records[self.fallback];
                record.to_match(&segments, RouteParams::default())
            })
    }

    /// Returns the concrete path of a named route.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRouteName` if no route has that name, or
    /// `DomainError::DynamicRoutePath` if its pattern has parameters.
    pub fn path_for(&self, name: &str) -> DomainResult<String> {
        let record = self
            .records
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .ok_or_else(|| DomainError::UnknownRouteName(name.to_string()))?;

        record
            .pattern
            .static_path()
            .ok_or_else(|| DomainError::DynamicRoutePath(name.to_string()))
    }

    /// Names of all named routes, in resolution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|r| r.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fallback() -> RouteEntry {
        RouteEntry::new("/:catchAll(.*)*", ViewKey::ErrorNotFound)
    }

    #[test]
    fn test_children_resolve_with_parent_view() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", ViewKey::MainLayout).with_children(vec![
                RouteEntry::new("", ViewKey::CreateDocumentPage).named("create"),
                RouteEntry::new("/history", ViewKey::HistoryPage).named("history"),
            ]),
            fallback(),
        ])
        .unwrap();

        let root = table.resolve("/");
        assert_eq!(root.name.as_deref(), Some("create"));
        assert_eq!(
            root.views,
            vec![ViewKey::MainLayout, ViewKey::CreateDocumentPage]
        );

        let history = table.resolve("/history");
        assert_eq!(history.name.as_deref(), Some("history"));
        assert_eq!(history.page(), Some(ViewKey::HistoryPage));
    }

    #[test]
    fn test_unmatched_path_falls_back() {
        let table = RouteTable::new(vec![RouteEntry::new("/a", ViewKey::HistoryPage), fallback()])
            .unwrap();

        let m = table.resolve("/foo/bar");
        assert_eq!(m.name, None);
        assert_eq!(m.views, vec![ViewKey::ErrorNotFound]);
        assert_eq!(m.params.get_all("catchAll"), &["foo", "bar"]);
        assert_eq!(m.path, "/foo/bar");
    }

    #[test]
    fn test_catch_all_declared_first_does_not_shadow() {
        let table = RouteTable::new(vec![
            fallback(),
            RouteEntry::new("/history", ViewKey::HistoryPage).named("history"),
        ])
        .unwrap();

        assert_eq!(table.resolve("/history").name.as_deref(), Some("history"));
        assert_eq!(table.resolve("/nope").page(), Some(ViewKey::ErrorNotFound));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/docs/:id", ViewKey::HistoryPage).named("by-id"),
            RouteEntry::new("/docs/latest", ViewKey::TemplatesPage).named("latest"),
            fallback(),
        ])
        .unwrap();

        let m = table.resolve("/docs/latest");
        assert_eq!(m.name.as_deref(), Some("by-id"));
        assert_eq!(m.params.get("id"), Some("latest"));
    }

    #[test]
    fn test_missing_catch_all_is_rejected() {
        let err = RouteTable::new(vec![RouteEntry::new("/", ViewKey::MainLayout)]).unwrap_err();
        assert_eq!(err, DomainError::MissingCatchAll);
    }

    #[test]
    fn test_nested_catch_all_is_not_a_fallback() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/", ViewKey::MainLayout).with_children(vec![
                RouteEntry::new("", ViewKey::CreateDocumentPage).named("create"),
                RouteEntry::new(":catchAll(.*)*", ViewKey::ErrorNotFound),
            ]),
        ])
        .unwrap_err();
        assert_eq!(err, DomainError::MissingCatchAll);
    }

    #[test]
    fn test_nested_catch_all_alongside_top_level_fallback() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/admin", ViewKey::MainLayout).with_children(vec![
                RouteEntry::new(":rest(.*)*", ViewKey::SettingsPage),
            ]),
            fallback(),
        ])
        .unwrap();

        assert_eq!(
            table.resolve("/admin/x").views,
            vec![ViewKey::MainLayout, ViewKey::SettingsPage]
        );
        assert_eq!(table.resolve("/other").views, vec![ViewKey::ErrorNotFound]);
    }

    #[test]
    fn test_duplicate_sibling_paths_are_rejected() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/history", ViewKey::HistoryPage),
            RouteEntry::new("/History/", ViewKey::TemplatesPage),
            fallback(),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoutePath(_)));
    }

    #[test]
    fn test_path_for() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/settings", ViewKey::SettingsPage).named("settings"),
            RouteEntry::new("/docs/:id", ViewKey::HistoryPage).named("doc"),
            fallback(),
        ])
        .unwrap();

        assert_eq!(table.path_for("settings").unwrap(), "/settings");
        assert_eq!(
            table.path_for("doc"),
            Err(DomainError::DynamicRoutePath("doc".to_string()))
        );
        assert_eq!(
            table.path_for("missing"),
            Err(DomainError::UnknownRouteName("missing".to_string()))
        );
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["settings", "doc"]);
    }
}
