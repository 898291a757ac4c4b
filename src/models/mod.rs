// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod entity;
pub mod search_result;
pub mod site_filter;
pub mod theme;

pub use entity::{Entity, EntityLabel};
pub use search_result::{SearchResponse, SearchResult};
pub use site_filter::SiteFilter;
pub use theme::ThemeCount;
