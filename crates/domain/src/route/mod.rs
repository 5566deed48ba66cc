//! Client-side routing: path patterns, the route table and the app routes.

mod pattern;
mod routes;
mod table;

pub use pattern::{PathPattern, RouteParams, Segment, split_path};
pub use routes::app_routes;
pub use table::{RouteEntry, RouteMatch, RouteTable, ViewKey};
