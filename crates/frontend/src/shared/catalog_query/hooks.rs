//! Привязка координатора к реактивной системе Leptos

use super::filter_state::{FilterField, FilterState};
use super::orchestrator::{FetchOrchestrator, FetchPhase, FetchTracker, ProductSource};
use super::projector::ListingView;
use super::sort_page::{PageState, SortState};
use super::synthesizer::{QueryInputs, QuerySynthesizer};
use contracts::domain::a001_product::dto::ProductListRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Входы каталога одной страницы списка.
///
/// Каждое поле пишет только свой контрол; запрос пересчитывается одним
/// эффектом при изменении любого входа.
#[derive(Clone, Copy)]
pub struct CatalogQuery {
    pub filter: RwSignal<FilterState>,
    pub sort: RwSignal<SortState>,
    pub page: RwSignal<PageState>,
    pub route_category: Signal<Option<String>>,
    query: RwSignal<Option<ProductListRequest>>,
}

pub fn use_catalog_query(route_category: Signal<Option<String>>) -> CatalogQuery {
    let filter = RwSignal::new(FilterState::default());
    let sort = RwSignal::new(SortState::default());
    let page = RwSignal::new(PageState::default());
    let query = RwSignal::new(None::<ProductListRequest>);
    let synthesizer = StoredValue::new(QuerySynthesizer::new());

    Effect::new(move |_| {
        let inputs = QueryInputs {
            filter: filter.get(),
            sort: sort.get(),
            page: page.get(),
            route_category: route_category.get(),
        };
        let Some(out) = synthesizer.try_update_value(|s| s.synthesize(&inputs)) else {
            return;
        };

        if out.page_reset {
            page.set(PageState::first());
        }
        let next = out.query;
        query.maybe_update(|current| {
            if current.as_ref() == Some(&next) {
                false
            } else {
                *current = Some(next);
                true
            }
        });
    });

    CatalogQuery {
        filter,
        sort,
        page,
        route_category,
        query,
    }
}

impl CatalogQuery {
    /// Текущий синтезированный запрос (`None` до первого пересчёта)
    pub fn query(&self) -> Signal<Option<ProductListRequest>> {
        self.query.into()
    }

    pub fn has_route_category(&self) -> bool {
        self.route_category
            .with(|c| c.as_deref().is_some_and(|c| !c.trim().is_empty()))
    }

    pub fn set_category(&self, value: String) {
        self.filter.update(|f| f.set_category(value));
    }

    pub fn set_search(&self, value: String) {
        self.filter.update(|f| f.set_search(value));
    }

    pub fn set_min_price(&self, value: String) {
        self.filter.update(|f| f.set_min_price(value));
    }

    pub fn set_max_price(&self, value: String) {
        self.filter.update(|f| f.set_max_price(value));
    }

    pub fn set_in_stock_only(&self, value: bool) {
        self.filter.update(|f| f.set_in_stock_only(value));
    }

    pub fn clear_filters(&self) {
        self.filter.update(FilterState::clear);
    }

    pub fn clear_field(&self, field: FilterField) {
        self.filter.update(|f| f.clear_field(field));
    }

    pub fn set_sort_key(&self, raw: String) {
        self.sort.maybe_update(|s| s.set_key(&raw));
    }

    pub fn set_page(&self, page: u32) {
        self.page.update(|p| p.set_page(page));
    }

    pub fn active_filters_count(&self) -> usize {
        let include_category = !self.has_route_category();
        self.filter.with(|f| f.active_count(include_category))
    }
}

/// Состояние загрузки каталога: `{loading, error, data}` плюс повтор
#[derive(Clone, Copy)]
pub struct CatalogFetch {
    tracker: RwSignal<FetchTracker>,
    view: Memo<Option<ListingView>>,
    refetch: Callback<()>,
}

pub fn use_catalog_fetch<S>(source: S, query: Signal<Option<ProductListRequest>>) -> CatalogFetch
where
    S: ProductSource + Clone + Send + Sync + 'static,
{
    let tracker = RwSignal::new(FetchTracker::new());
    let orchestrator = FetchOrchestrator::new(source, tracker);

    let issuing = orchestrator.clone();
    Effect::new(move |_| {
        if let Some(q) = query.get() {
            let pending = issuing.issue(q);
            spawn_local(async move {
                pending.await;
            });
        }
    });

    let refetch = Callback::new(move |_: ()| {
        if let Some(pending) = orchestrator.refetch() {
            spawn_local(async move {
                pending.await;
            });
        }
    });

    let view = Memo::new(move |_| tracker.with(|t| t.data().map(ListingView::project)));

    CatalogFetch {
        tracker,
        view,
        refetch,
    }
}

impl CatalogFetch {
    pub fn loading(&self) -> bool {
        self.tracker.with(FetchTracker::loading)
    }

    pub fn phase(&self) -> FetchPhase {
        self.tracker.with(FetchTracker::phase)
    }

    pub fn error(&self) -> Option<String> {
        self.tracker.with(|t| t.error().map(str::to_string))
    }

    pub fn view(&self) -> Option<ListingView> {
        self.view.get()
    }

    pub fn view_memo(&self) -> Memo<Option<ListingView>> {
        self.view
    }

    pub fn refetch(&self) {
        self.refetch.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use async_trait::async_trait;
    use contracts::domain::a001_product::dto::ProductListing;
    use std::sync::{Arc, Mutex};

    /// Запоминает (page, search) каждого запроса
    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Arc<Mutex<Vec<(u32, Option<String>)>>>,
    }

    impl RecordingSource {
        fn calls(&self) -> Vec<(u32, Option<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl ProductSource for RecordingSource {
        async fn fetch_products(
            &self,
            query: &ProductListRequest,
        ) -> Result<ProductListing, String> {
            self.calls
                .lock()
                .unwrap()
                .push((query.page, query.search.clone()));
            Ok(ProductListing {
                items: Vec::new(),
                total: 200,
                total_pages: 10,
                current_page: query.page,
            })
        }
    }

    fn settle() {
        for _ in 0..4 {
            Executor::poll_local();
        }
    }

    fn mount(source: &RecordingSource) -> (Owner, CatalogQuery, CatalogFetch) {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        let query = use_catalog_query(Signal::stored(None));
        let fetch = use_catalog_fetch(source.clone(), query.query());
        settle();
        (owner, query, fetch)
    }

    #[test]
    fn test_filter_change_writes_page_back_without_double_fetch() {
        let source = RecordingSource::default();
        let (_owner, query, _fetch) = mount(&source);

        query.set_page(5);
        settle();
        query.set_search("red".to_string());
        settle();

        assert_eq!(
            source.calls(),
            vec![(1, None), (5, None), (1, Some("red".to_string()))]
        );
        assert_eq!(query.page.get_untracked().page, 1);
    }

    #[test]
    fn test_rejected_sort_key_issues_nothing() {
        let source = RecordingSource::default();
        let (_owner, query, _fetch) = mount(&source);

        query.set_page(3);
        settle();
        query.set_sort_key("rating-sideways".to_string());
        settle();

        assert_eq!(source.calls(), vec![(1, None), (3, None)]);
        assert_eq!(query.page.get_untracked().page, 3);
    }

    #[test]
    fn test_refetch_reissues_current_query() {
        let source = RecordingSource::default();
        let (_owner, query, fetch) = mount(&source);

        query.set_page(2);
        settle();
        fetch.refetch();
        settle();

        assert_eq!(source.calls(), vec![(1, None), (2, None), (2, None)]);
        assert_eq!(fetch.phase(), FetchPhase::Success);
        assert_eq!(fetch.view().map(|v| v.current_page), Some(2));
    }
}
