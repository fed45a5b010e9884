use crate::shared::catalog_query::PageLink;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls - номера страниц (1-based) с пропусками и стрелками
///
/// Сам компонент ничего не ограничивает: `on_page_change` получает только
/// номера из `pages`, а стрелки отключаются на краях.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Page buttons to show (see `projector::page_window`)
    #[prop(into)]
    pages: Signal<Vec<PageLink>>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls" aria-label="Страницы">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    pages
                        .get()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(n) => view! {
                                <button
                                    class={if n == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }}
                                    on:click=move |_| {
                                        if n != current {
                                            on_page_change.run(n);
                                        }
                                    }
                                >
                                    {n.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageLink::Gap => view! {
                                <span class="pagination-gap">"…"</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
