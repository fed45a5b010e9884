use crate::domain::a001_product::api::HttpProductSource;
use crate::domain::a002_category::CategoryCache;
use crate::shared::catalog_query::{
    use_catalog_fetch, use_catalog_query, CatalogFetch, CatalogQuery, FilterField, FilterState,
};
use crate::shared::number_format::format_price;
use leptos::prelude::*;

/// Вид списка товаров
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// ViewModel страницы каталога
#[derive(Clone, Copy)]
pub struct ProductListViewModel {
    pub query: CatalogQuery,
    pub fetch: CatalogFetch,
    pub categories: CategoryCache,
    pub view_mode: RwSignal<ViewMode>,
    pub filters_expanded: RwSignal<bool>,
}

impl ProductListViewModel {
    pub fn new(
        source: HttpProductSource,
        categories: CategoryCache,
        route_category: Signal<Option<String>>,
    ) -> Self {
        let query = use_catalog_query(route_category);
        let fetch = use_catalog_fetch(source, query.query());
        categories.ensure_loaded();

        Self {
            query,
            fetch,
            categories,
            view_mode: RwSignal::new(ViewMode::default()),
            filters_expanded: RwSignal::new(true),
        }
    }

    /// Заголовок: имя маршрутной категории, пока кэш не загружен - её ключ
    pub fn title(&self) -> String {
        match self.query.route_category.get() {
            Some(key) if !key.trim().is_empty() => {
                self.categories.name_of(&key).unwrap_or(key)
            }
            _ => "Каталог".to_string(),
        }
    }

    /// Переход на страницу; номер приводится к `[1, total_pages]`
    pub fn go_to_page(&self, page: u32) {
        let target = self
            .fetch
            .view_memo()
            .with_untracked(|v| v.as_ref().map(|v| v.clamp_page(page)))
            .unwrap_or(1);
        self.query.set_page(target);
    }

    /// Чипы активных фильтров: (поле, подпись)
    pub fn filter_tags(&self) -> Vec<(FilterField, String)> {
        let include_category = !self.query.has_route_category();
        let categories = self.categories;
        self.query.filter.with(|filter| {
            filter
                .active_fields(include_category)
                .into_iter()
                .map(|field| {
                    let label = filter_tag_label(field, filter, |key| categories.name_of(key));
                    (field, label)
                })
                .collect()
        })
    }
}

/// Подпись чипа фильтра; `category_name` переводит id категории в имя
pub fn filter_tag_label(
    field: FilterField,
    filter: &FilterState,
    category_name: impl Fn(&str) -> Option<String>,
) -> String {
    match field {
        FilterField::Category => {
            let key = filter.category_filter().unwrap_or_default();
            format!(
                "Категория: {}",
                category_name(key).unwrap_or_else(|| key.to_string())
            )
        }
        FilterField::Search => format!("Поиск: {}", filter.search_filter().unwrap_or_default()),
        FilterField::MinPrice => format!(
            "От {}",
            filter.min_price_value().map(format_price).unwrap_or_default()
        ),
        FilterField::MaxPrice => format!(
            "До {}",
            filter.max_price_value().map(format_price).unwrap_or_default()
        ),
        FilterField::InStock => "Только в наличии".to_string(),
    }
}
