//! Client-side navigation over the route table.

mod lazy_views;
mod navigator;

pub use lazy_views::LazyViews;
pub use navigator::{Navigation, Navigator};
