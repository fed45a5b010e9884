pub mod api;
pub mod cache;

pub use cache::{use_category_cache, CategoryCache};
