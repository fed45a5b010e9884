use super::card::ProductCard;
use super::view_model::{ProductListViewModel, ViewMode};
use crate::domain::a001_product::api::HttpProductSource;
use crate::domain::a002_category::use_category_cache;
use crate::shared::catalog_query::sort_page::sort_options;
use crate::shared::catalog_query::FetchPhase;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Каталог без фиксированной категории (`/`, `/products`)
#[component]
pub fn ProductCatalogPage() -> impl IntoView {
    view! { <CatalogListing route_category=Signal::derive(|| None) /> }
}

/// Каталог категории (`/category/:category`): категория задана маршрутом
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let route_category = Signal::derive(move || params.with(|p| p.get("category")));
    view! { <CatalogListing route_category=route_category /> }
}

#[component]
fn CatalogListing(route_category: Signal<Option<String>>) -> impl IntoView {
    let source = use_context::<HttpProductSource>().expect("HttpProductSource context not found");
    let vm = ProductListViewModel::new(source, use_category_cache(), route_category);
    let query = vm.query;
    let fetch = vm.fetch;

    let active_filters_count = Signal::derive(move || query.active_filters_count());
    let listing = fetch.view_memo();

    let current_page = Signal::derive(move || {
        listing.with(|v| v.as_ref().map(|v| v.current_page).unwrap_or(1))
    });
    let total_pages = Signal::derive(move || {
        listing.with(|v| v.as_ref().map(|v| v.total_pages).unwrap_or(1))
    });
    let pages = Signal::derive(move || {
        listing.with(|v| v.as_ref().map(|v| v.page_numbers.clone()).unwrap_or_default())
    });
    let counter = Signal::derive(move || {
        listing.with(|v| v.as_ref().map(|v| v.total_label.clone()))
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || vm.title()) counter=counter>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| fetch.refetch()
                    disabled=Signal::derive(move || fetch.loading())
                >
                    {move || if fetch.loading() { "Загрузка..." } else { "Обновить" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=vm.filters_expanded
                    active_filters_count=active_filters_count
                    on_clear=Callback::new(move |_| query.clear_filters())
                    toolbar=move || view! {
                        <div class="catalog-toolbar">
                            <Select
                                id="catalog-sort"
                                value=Signal::derive(move || query.sort.get().key().to_string())
                                options=Signal::derive(sort_options)
                                on_change=Callback::new(move |key: String| query.set_sort_key(key))
                            />
                            <div class="view-toggle">
                                <button
                                    class=move || view_toggle_class(vm.view_mode.get() == ViewMode::Grid)
                                    title="Плиткой"
                                    on:click=move |_| vm.view_mode.set(ViewMode::Grid)
                                >
                                    {icon("grid")}
                                </button>
                                <button
                                    class=move || view_toggle_class(vm.view_mode.get() == ViewMode::List)
                                    title="Списком"
                                    on:click=move |_| vm.view_mode.set(ViewMode::List)
                                >
                                    {icon("list")}
                                </button>
                            </div>
                        </div>
                    }
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <SearchInput
                                value=Signal::derive(move || query.filter.with(|f| f.search.clone()))
                                on_change=Callback::new(move |v: String| query.set_search(v))
                            />
                            <Show when=move || !query.has_route_category()>
                                <Select
                                    id="catalog-category"
                                    label="Категория"
                                    value=Signal::derive(move || query.filter.with(|f| f.category.clone()))
                                    options=Signal::derive(move || vm.categories.select_options())
                                    disabled=Signal::derive(move || Some(vm.categories.loading.get()))
                                    on_change=Callback::new(move |v: String| query.set_category(v))
                                />
                            </Show>
                            <Input
                                id="catalog-min-price"
                                label="Цена от"
                                inputmode="decimal"
                                value=Signal::derive(move || query.filter.with(|f| f.min_price.clone()))
                                on_input=Callback::new(move |v: String| query.set_min_price(v))
                            />
                            <Input
                                id="catalog-max-price"
                                label="Цена до"
                                inputmode="decimal"
                                value=Signal::derive(move || query.filter.with(|f| f.max_price.clone()))
                                on_input=Callback::new(move |v: String| query.set_max_price(v))
                            />
                            <Checkbox
                                id="catalog-in-stock"
                                label="Только в наличии"
                                checked=Signal::derive(move || query.filter.with(|f| f.in_stock_only))
                                on_change=Callback::new(move |v: bool| query.set_in_stock_only(v))
                            />
                        </div>
                    }
                    filter_tags=move || view! {
                        <For
                            each=move || vm.filter_tags()
                            key=|(field, label)| (*field, label.clone())
                            children=move |(field, label)| view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| query.clear_field(field))
                                />
                            }
                        />
                    }
                />

                {move || fetch.error().map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert")}
                        <span>{format!("Не удалось загрузить товары: {}", e)}</span>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch.refetch()>
                            "Повторить"
                        </Button>
                    </div>
                })}

                {move || {
                    let mode = vm.view_mode.get();
                    match listing.get() {
                        None if fetch.phase() == FetchPhase::Error => view! { <></> }.into_any(),
                        None => view! {
                            <div class="catalog-loading"><Spinner /></div>
                        }.into_any(),
                        Some(page) if page.is_empty => view! {
                            <div class="catalog-empty">
                                {icon("package")}
                                <p>"Товары не найдены"</p>
                                <Show when=move || { active_filters_count.get() > 0 }>
                                    <button class="button button--ghost" on:click=move |_| query.clear_filters()>
                                        "Сбросить фильтры"
                                    </button>
                                </Show>
                            </div>
                        }.into_any(),
                        Some(page) => {
                            let grid_class = match mode {
                                ViewMode::Grid => "product-grid",
                                ViewMode::List => "product-list",
                            };
                            view! {
                                <div class=move || {
                                    if fetch.loading() {
                                        format!("{} {}--stale", grid_class, grid_class)
                                    } else {
                                        grid_class.to_string()
                                    }
                                }>
                                    {page.cards
                                        .into_iter()
                                        .map(|card| view! { <ProductCard card=card mode=mode /> })
                                        .collect_view()}
                                </div>
                                <div class="catalog-footer">
                                    <span class="catalog-footer__count">
                                        {format!("Показано {} из {}", page.displayed_count, page.total_label)}
                                    </span>
                                </div>
                            }.into_any()
                        }
                    }
                }}

                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    pages=pages
                    on_page_change=Callback::new(move |page: u32| vm.go_to_page(page))
                />
            </div>
        </div>
    }
}

fn view_toggle_class(active: bool) -> &'static str {
    if active {
        "view-toggle__btn view-toggle__btn--active"
    } else {
        "view-toggle__btn"
    }
}
