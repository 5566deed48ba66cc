//! Routes of the Svetlana front end.

use crate::error::DomainResult;
use crate::route::table::{RouteEntry, RouteTable, ViewKey};

/// Builds the application route table.
///
/// The main layout hosts every page; anything else lands on the
/// not-found view, which stays last.
///
/// # Errors
///
/// Only fails if the declarations below are malformed.
pub fn app_routes() -> DomainResult<RouteTable> {
    RouteTable::new(vec![
        RouteEntry::new("/", ViewKey::MainLayout).with_children(vec![
            RouteEntry::new("", ViewKey::CreateDocumentPage).named("create"),
            RouteEntry::new("/history", ViewKey::HistoryPage).named("history"),
            RouteEntry::new("/templates", ViewKey::TemplatesPage).named("templates"),
            RouteEntry::new("/settings", ViewKey::SettingsPage).named("settings"),
        ]),
        RouteEntry::new("/:catchAll(.*)*", ViewKey::ErrorNotFound),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_app_routes_resolve() {
        let table = app_routes().unwrap();

        let cases = [
            ("/", "create", ViewKey::CreateDocumentPage),
            ("/history", "history", ViewKey::HistoryPage),
            ("/templates", "templates", ViewKey::TemplatesPage),
            ("/settings", "settings", ViewKey::SettingsPage),
        ];
        for (path, name, page) in cases {
            let m = table.resolve(path);
            assert_eq!(m.name.as_deref(), Some(name), "path {path}");
            assert_eq!(m.views, vec![ViewKey::MainLayout, page], "path {path}");
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let table = app_routes().unwrap();
        let m = table.resolve("/foo/bar");
        assert_eq!(m.name, None);
        assert_eq!(m.views, vec![ViewKey::ErrorNotFound]);
        assert_eq!(m.params.get_all("catchAll"), &["foo", "bar"]);
    }

    #[test]
    fn test_named_paths() {
        let table = app_routes().unwrap();
        assert_eq!(table.path_for("create").unwrap(), "/");
        assert_eq!(table.path_for("templates").unwrap(), "/templates");
    }
}
