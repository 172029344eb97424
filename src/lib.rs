pub mod config;
pub mod describe;
pub mod models;
pub mod repository;
pub mod search;

pub use config::AppConfig;
pub use models::{Currency, Listing};
pub use search::{search, FilterSpec, PageItem, PageResult, SortKey};
