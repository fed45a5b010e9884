//! Синтез запроса каталога из независимых частей UI-состояния.
//!
//! Единственная точка пересчёта: каждый вызов `synthesize` получает снимок
//! всех входов и строит из него один нормализованный `ProductListRequest`.

use super::filter_state::FilterState;
use super::sort_page::{PageState, SortState};
use contracts::domain::a001_product::dto::ProductListRequest;

/// Снимок входов синтезатора на момент изменения
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryInputs {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
    /// Категория из маршрута (`/category/:category`), перекрывает фильтр
    pub route_category: Option<String>,
}

/// Часть входов, изменение которой сбрасывает страницу
#[derive(Clone, Debug, PartialEq)]
struct Scope {
    filter: FilterState,
    sort: SortState,
    route_category: Option<String>,
}

impl From<&QueryInputs> for Scope {
    fn from(inputs: &QueryInputs) -> Self {
        Self {
            filter: inputs.filter.clone(),
            sort: inputs.sort,
            route_category: inputs.route_category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Synthesized {
    pub query: ProductListRequest,
    /// Страница в `PageState` должна быть переписана на 1
    pub page_reset: bool,
}

#[derive(Debug, Default)]
pub struct QuerySynthesizer {
    last_scope: Option<Scope>,
}

impl QuerySynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Строит запрос по снимку входов.
    ///
    /// Если со времени прошлого вызова изменилось что-то кроме страницы,
    /// в запрос уходит страница 1.
    pub fn synthesize(&mut self, inputs: &QueryInputs) -> Synthesized {
        let scope = Scope::from(inputs);
        let scope_changed = self
            .last_scope
            .as_ref()
            .is_some_and(|previous| previous != &scope);
        self.last_scope = Some(scope);

        let page = if scope_changed { 1 } else { inputs.page.page.max(1) };
        let query = build_query(inputs, page);

        Synthesized {
            page_reset: inputs.page.page != page,
            query,
        }
    }
}

/// Нормализация: маршрутная категория важнее фильтра, цены приводятся к
/// числам, незаданные ограничения опускаются.
pub fn build_query(inputs: &QueryInputs, page: u32) -> ProductListRequest {
    let filter = &inputs.filter;

    let category = match inputs.route_category.as_deref() {
        Some(route) if !route.trim().is_empty() => Some(route.trim().to_string()),
        _ => filter.category_filter().map(str::to_string),
    };

    ProductListRequest {
        category,
        search: filter.search_filter().map(str::to_string),
        min_price: filter.min_price_value(),
        max_price: filter.max_price_value(),
        in_stock: filter.in_stock_only,
        sort_by: inputs.sort.field,
        sort_order: inputs.sort.direction,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sort::{SortDirection, SortField};

    fn inputs_on_page(page: u32) -> QueryInputs {
        QueryInputs {
            page: PageState { page },
            ..QueryInputs::default()
        }
    }

    #[test]
    fn test_initial_mount_keeps_page() {
        let mut synth = QuerySynthesizer::new();
        let out = synth.synthesize(&inputs_on_page(1));
        assert_eq!(out.query, ProductListRequest::default());
        assert!(!out.page_reset);
    }

    #[test]
    fn test_page_change_alone_does_not_reset() {
        let mut synth = QuerySynthesizer::new();
        synth.synthesize(&inputs_on_page(1));

        let out = synth.synthesize(&inputs_on_page(4));

        assert_eq!(out.query.page, 4);
        assert!(!out.page_reset);
    }

    #[test]
    fn test_any_filter_or_sort_change_resets_page() {
        let changes: Vec<Box<dyn Fn(&mut QueryInputs)>> = vec![
            Box::new(|i| i.filter.set_category("bags")),
            Box::new(|i| i.filter.set_search("red")),
            Box::new(|i| i.filter.set_min_price("10")),
            Box::new(|i| i.filter.set_max_price("abc")),
            Box::new(|i| i.filter.set_in_stock_only(true)),
            Box::new(|i| i.sort.set_sort(SortField::Price, SortDirection::Asc)),
            Box::new(|i| i.route_category = Some("shoes".to_string())),
        ];

        for change in changes {
            let mut synth = QuerySynthesizer::new();
            let mut inputs = inputs_on_page(1);
            synth.synthesize(&inputs);
            inputs.page.set_page(5);
            assert_eq!(synth.synthesize(&inputs).query.page, 5);

            change(&mut inputs);
            let out = synth.synthesize(&inputs);

            assert_eq!(out.query.page, 1);
            assert!(out.page_reset);
        }
    }

    #[test]
    fn test_reset_then_page_write_back_is_stable() {
        let mut synth = QuerySynthesizer::new();
        let mut inputs = inputs_on_page(3);
        synth.synthesize(&inputs);

        inputs.filter.set_search("red");
        let first = synth.synthesize(&inputs);
        assert!(first.page_reset);

        // UI записывает страницу 1 обратно и пересинтез даёт тот же запрос
        inputs.page = PageState::first();
        let second = synth.synthesize(&inputs);
        assert!(!second.page_reset);
        assert_eq!(first.query, second.query);
    }

    #[test]
    fn test_sentinels_are_omitted() {
        let mut synth = QuerySynthesizer::new();
        let mut inputs = QueryInputs::default();
        inputs.filter.set_category("");
        inputs.filter.set_search("   ");
        inputs.filter.set_min_price("");
        inputs.filter.set_in_stock_only(false);

        let query = synth.synthesize(&inputs).query;
        let qs = serde_qs::to_string(&query).unwrap();

        assert_eq!(qs, "sortBy=createdAt&sortOrder=desc&page=1");
    }

    #[test]
    fn test_non_numeric_min_price_is_dropped() {
        let mut synth = QuerySynthesizer::new();
        let mut inputs = QueryInputs::default();
        inputs.filter.set_min_price("abc");
        inputs.filter.set_max_price("250");

        let query = synth.synthesize(&inputs).query;

        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, Some(250.0));
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(!qs.contains("minPrice"));
        assert!(!qs.contains("NaN"));
    }

    #[test]
    fn test_route_category_overrides_filter() {
        let mut synth = QuerySynthesizer::new();
        let mut inputs = QueryInputs::default();
        inputs.filter.set_category("bags");
        inputs.route_category = Some("shoes".to_string());

        let query = synth.synthesize(&inputs).query;

        assert_eq!(query.category.as_deref(), Some("shoes"));
    }

    #[test]
    fn test_inverted_price_range_passes_through() {
        let mut inputs = QueryInputs::default();
        inputs.filter.set_min_price("500");
        inputs.filter.set_max_price("100");

        let query = build_query(&inputs, 1);

        assert_eq!(query.min_price, Some(500.0));
        assert_eq!(query.max_price, Some(100.0));
    }

    #[test]
    fn test_clear_reproduces_initial_query() {
        let mut synth = QuerySynthesizer::new();
        let mut inputs = QueryInputs::default();
        let initial = synth.synthesize(&inputs).query;

        inputs.filter.set_category("bags");
        inputs.filter.set_search("leather");
        inputs.filter.set_min_price("10");
        inputs.filter.set_in_stock_only(true);
        inputs.page.set_page(2);
        synth.synthesize(&inputs);

        inputs.filter.clear();
        let cleared = synth.synthesize(&inputs).query;

        assert_eq!(cleared, initial);
    }
}
