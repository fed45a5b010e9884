//! Product catalog list UI Module
//!
//! - card.rs: карточка товара (сетка / строка списка)
//! - view_model.rs: состояние страницы, команды фильтров и пагинации
//! - view.rs: Leptos-компоненты страниц каталога

mod card;
mod view;
mod view_model;

pub use view::{CategoryPage, ProductCatalogPage};
pub use view_model::{ProductListViewModel, ViewMode};
