//! Проекция страницы каталога в модели представления (сетка / список)

use crate::shared::number_format::{format_grouped, format_price};
use contracts::domain::a001_product::dto::{ProductListing, ProductSummaryDto};

/// Сколько соседних страниц показывать вокруг текущей
pub const PAGE_WINDOW: u32 = 2;

/// Кнопка пагинации
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    /// Пропуск "…"
    Gap,
}

/// Карточка товара, готовая к отрисовке
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub href: String,
    pub image: Option<String>,
    pub price_label: String,
    pub old_price_label: Option<String>,
    pub discount_label: Option<String>,
    pub category_label: Option<String>,
    pub in_stock: bool,
    pub stock_label: String,
}

impl From<&ProductSummaryDto> for ProductCardView {
    fn from(product: &ProductSummaryDto) -> Self {
        let href = format!(
            "/product/{}",
            product.slug.as_deref().unwrap_or(product.id.as_str())
        );
        let old_price_label = product
            .discount_percent()
            .and(product.compare_at_price)
            .map(format_price);

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            href,
            image: product.primary_image().map(str::to_string),
            price_label: format_price(product.price),
            old_price_label,
            discount_label: product.discount_percent().map(|d| format!("-{}%", d)),
            category_label: product
                .category
                .as_ref()
                .and_then(|c| c.name())
                .map(str::to_string),
            in_stock: product.in_stock(),
            stock_label: stock_label(product.stock),
        }
    }
}

fn stock_label(stock: i64) -> String {
    match stock {
        s if s <= 0 => "Нет в наличии".to_string(),
        s if s < 5 => format!("Осталось {} шт.", s),
        _ => "В наличии".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingView {
    pub cards: Vec<ProductCardView>,
    pub is_empty: bool,
    pub displayed_count: usize,
    pub total: u64,
    pub total_label: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_numbers: Vec<PageLink>,
}

impl ListingView {
    pub fn project(listing: &ProductListing) -> Self {
        let total_pages = listing.total_pages.max(1);
        let current_page = listing.current_page.clamp(1, total_pages);

        Self {
            cards: listing.items.iter().map(ProductCardView::from).collect(),
            is_empty: listing.items.is_empty(),
            displayed_count: listing.items.len(),
            total: listing.total,
            total_label: format_grouped(listing.total as f64, 0),
            current_page,
            total_pages,
            page_numbers: page_window(current_page, total_pages, PAGE_WINDOW),
        }
    }

    /// Приводит желаемую страницу к `[1, total_pages]`
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Номера страниц: все подряд для небольших списков, иначе первая, последняя
/// и окно вокруг текущей с пропусками между ними.
pub fn page_window(current: u32, total: u32, window: u32) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }
    // первая + последняя + окно + два пропуска
    let full_len = 2 * window + 5;
    if total <= full_len {
        return (1..=total).map(PageLink::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(window).max(2);
    let mut end = current.saturating_add(window).min(total - 1);

    // У края окно сдвигается, чтобы кнопок всегда было одинаково
    let span = 2 * window + 1;
    if start <= 3 {
        start = 2;
        end = (start + span).min(total - 1);
    } else if end >= total - 2 {
        end = total - 1;
        start = end.saturating_sub(span).max(2);
    }

    let mut links = vec![PageLink::Page(1)];
    if start > 2 {
        links.push(PageLink::Gap);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total - 1 {
        links.push(PageLink::Gap);
    }
    links.push(PageLink::Page(total));
    links
}
