//! Координатор запроса каталога: фильтры, сортировка и страница сводятся в
//! один запрос к `/api/products`, ответ - в модели представления.

pub mod filter_state;
pub mod hooks;
pub mod orchestrator;
pub mod projector;
pub mod sort_page;
pub mod synthesizer;

pub use filter_state::{FilterField, FilterState};
pub use hooks::{use_catalog_fetch, use_catalog_query, CatalogFetch, CatalogQuery};
pub use orchestrator::{FetchOrchestrator, FetchPhase, FetchTracker, ProductSource};
pub use projector::{ListingView, PageLink, ProductCardView};
pub use sort_page::{PageState, SortState};
pub use synthesizer::{QueryInputs, QuerySynthesizer};
