//! Загрузка страниц каталога с правилом "побеждает последний запрос".
//!
//! Каждый выпущенный запрос получает монотонный номер. Ответ применяется
//! только если его номер совпадает с номером последнего выпущенного запроса,
//! порядок прихода ответов из сети значения не имеет.

use async_trait::async_trait;
use contracts::domain::a001_product::dto::{ProductListRequest, ProductListing};
use leptos::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Источник страниц каталога (HTTP в приложении, фейки в тестах)
#[async_trait(?Send)]
pub trait ProductSource {
    async fn fetch_products(&self, query: &ProductListRequest) -> Result<ProductListing, String>;
}

// ============================================================================
// Tracker: чистая машина состояний без сети
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Номер выпущенного запроса
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Ответ на устаревший запрос
    Discarded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchTracker {
    issued: u64,
    phase: FetchPhase,
    error: Option<String>,
    data: Option<ProductListing>,
    last_query: Option<ProductListRequest>,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начало загрузки: loading, ошибка сброшена, данные остаются видимыми
    pub fn begin(&mut self, query: ProductListRequest) -> RequestTicket {
        self.issued += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;
        self.last_query = Some(query);
        RequestTicket(self.issued)
    }

    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<ProductListing, String>,
    ) -> Resolution {
        if ticket.0 != self.issued {
            log::debug!(
                "Discarding catalog response #{} (latest is #{})",
                ticket.0,
                self.issued
            );
            return Resolution::Discarded;
        }

        match result {
            Ok(listing) => {
                log::debug!(
                    "Applying catalog response #{}: {} items of {}",
                    ticket.0,
                    listing.items.len(),
                    listing.total
                );
                self.data = Some(listing);
                self.phase = FetchPhase::Success;
            }
            Err(e) => {
                log::warn!("Catalog request #{} failed: {}", ticket.0, e);
                self.error = Some(e);
                self.phase = FetchPhase::Error;
            }
        }
        Resolution::Applied
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&ProductListing> {
        self.data.as_ref()
    }

    /// Последний выпущенный запрос (для кнопки "Повторить")
    pub fn last_query(&self) -> Option<&ProductListRequest> {
        self.last_query.as_ref()
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Ячейка, в которой живёт трекер.
///
/// В приложении это сигнал Leptos, в тестах - `Rc<RefCell<_>>`.
/// `None` означает, что владелец уже уничтожен (компонент размонтирован).
pub trait TrackerCell: Clone + 'static {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut FetchTracker) -> R) -> Option<R>;
}

impl TrackerCell for Rc<RefCell<FetchTracker>> {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut FetchTracker) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl TrackerCell for RwSignal<FetchTracker> {
    fn with_tracker<R>(&self, f: impl FnOnce(&mut FetchTracker) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone)]
pub struct FetchOrchestrator<S, C> {
    source: S,
    cell: C,
}

impl<S, C> FetchOrchestrator<S, C>
where
    S: ProductSource + Clone + 'static,
    C: TrackerCell,
{
    pub fn new(source: S, cell: C) -> Self {
        Self { source, cell }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Выпускает запрос.
    ///
    /// Переход в loading происходит сразу, сеть - когда вызывающий код
    /// запустит возвращённый future (в приложении через `spawn_local`).
    pub fn issue(&self, query: ProductListRequest) -> impl Future<Output = Resolution> + 'static {
        let ticket = self.cell.with_tracker(|t| t.begin(query.clone()));
        let source = self.source.clone();
        let cell = self.cell.clone();

        async move {
            let Some(ticket) = ticket else {
                return Resolution::Discarded;
            };
            log::debug!("Issuing catalog request #{}: {:?}", ticket.0, query);
            let result = source.fetch_products(&query).await;
            cell.with_tracker(|t| t.resolve(ticket, result))
                .unwrap_or(Resolution::Discarded)
        }
    }

    /// Повтор последнего запроса без изменений; `None`, если запросов ещё не было
    pub fn refetch(&self) -> Option<impl Future<Output = Resolution> + 'static> {
        let query = self
            .cell
            .with_tracker(|t| t.last_query().cloned())
            .flatten()?;
        Some(self.issue(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::dto::ProductSummaryDto;
    use futures::executor::block_on;

    fn product(id: &str) -> ProductSummaryDto {
        ProductSummaryDto {
            id: id.to_string(),
            name: format!("Товар {}", id),
            slug: None,
            price: 100.0,
            compare_at_price: None,
            stock: 1,
            images: Vec::new(),
            category: None,
            rating: None,
            created_at: None,
        }
    }

    fn listing(count: usize, tag: &str) -> ProductListing {
        ProductListing {
            items: (0..count).map(|i| product(&format!("{}-{}", tag, i))).collect(),
            total: count as u64,
            total_pages: 1,
            current_page: 1,
        }
    }

    /// Отвечает страницей, где id товаров помечены поисковой строкой запроса
    #[derive(Clone, Default)]
    struct EchoSource {
        calls: Rc<RefCell<Vec<ProductListRequest>>>,
    }

    #[async_trait(?Send)]
    impl ProductSource for EchoSource {
        async fn fetch_products(
            &self,
            query: &ProductListRequest,
        ) -> Result<ProductListing, String> {
            self.calls.borrow_mut().push(query.clone());
            let tag = query.search.clone().unwrap_or_default();
            if tag == "fail" {
                return Err("Failed to send request: network down".to_string());
            }
            Ok(listing(3, &tag))
        }
    }

    fn query(search: &str) -> ProductListRequest {
        ProductListRequest {
            search: Some(search.to_string()),
            ..ProductListRequest::default()
        }
    }

    fn orchestrator() -> (
        FetchOrchestrator<EchoSource, Rc<RefCell<FetchTracker>>>,
        Rc<RefCell<FetchTracker>>,
        EchoSource,
    ) {
        let cell = Rc::new(RefCell::new(FetchTracker::new()));
        let source = EchoSource::default();
        (
            FetchOrchestrator::new(source.clone(), cell.clone()),
            cell,
            source,
        )
    }

    #[test]
    fn test_issue_sets_loading_immediately() {
        let (orch, cell, _) = orchestrator();
        assert_eq!(cell.borrow().phase(), FetchPhase::Idle);

        let pending = orch.issue(query("a"));
        assert!(cell.borrow().loading());
        assert_eq!(cell.borrow().error(), None);

        assert_eq!(block_on(pending), Resolution::Applied);
        assert_eq!(cell.borrow().phase(), FetchPhase::Success);
        assert!(!cell.borrow().loading());
    }

    #[test]
    fn test_last_issued_wins_over_last_arrived() {
        let (orch, cell, _) = orchestrator();

        let first = orch.issue(query("q1"));
        let second = orch.issue(query("q2"));

        // Ответ на Q2 приходит раньше ответа на Q1
        assert_eq!(block_on(second), Resolution::Applied);
        assert_eq!(block_on(first), Resolution::Discarded);

        let tracker = cell.borrow();
        let data = tracker.data().unwrap();
        assert!(data.items.iter().all(|p| p.id.starts_with("q2-")));
        assert_eq!(tracker.phase(), FetchPhase::Success);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let (orch, cell, _) = orchestrator();

        let stale = orch.issue(query("fail"));
        let fresh = orch.issue(query("ok"));
        block_on(fresh);
        assert_eq!(block_on(stale), Resolution::Discarded);

        assert_eq!(cell.borrow().error(), None);
        assert_eq!(cell.borrow().phase(), FetchPhase::Success);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let cell = Rc::new(RefCell::new(FetchTracker::new()));
        let ticket = cell.borrow_mut().begin(query("ok"));
        cell.borrow_mut().resolve(ticket, Ok(listing(12, "ok")));

        let orch = FetchOrchestrator::new(EchoSource::default(), cell.clone());
        block_on(orch.issue(query("fail")));

        let tracker = cell.borrow();
        assert_eq!(tracker.data().map(|d| d.items.len()), Some(12));
        assert_eq!(
            tracker.error(),
            Some("Failed to send request: network down")
        );
        assert!(!tracker.loading());
        assert_eq!(tracker.phase(), FetchPhase::Error);
    }

    #[test]
    fn test_empty_result_is_not_error() {
        let cell = Rc::new(RefCell::new(FetchTracker::new()));
        let ticket = cell.borrow_mut().begin(ProductListRequest::default());
        cell.borrow_mut().resolve(ticket, Ok(ProductListing {
            items: Vec::new(),
            total: 0,
            total_pages: 1,
            current_page: 1,
        }));

        let tracker = cell.borrow();
        assert_eq!(tracker.error(), None);
        assert_eq!(tracker.phase(), FetchPhase::Success);
        assert!(tracker.data().unwrap().items.is_empty());
    }

    #[test]
    fn test_refetch_reissues_identical_query() {
        let (orch, cell, source) = orchestrator();
        assert!(orch.refetch().is_none());

        block_on(orch.issue(query("fail")));
        assert_eq!(cell.borrow().phase(), FetchPhase::Error);

        let retry = orch.refetch().unwrap();
        assert!(cell.borrow().loading());
        assert_eq!(cell.borrow().error(), None);
        block_on(retry);

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
