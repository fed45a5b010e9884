use leptos::prelude::*;

/// PageHeader - заголовок страницы каталога со счётчиком и действиями справа
#[component]
pub fn PageHeader(
    /// Page title (reactive: category name arrives after the cache loads)
    #[prop(into)]
    title: Signal<String>,

    /// Optional counter shown next to the title
    #[prop(optional, into)]
    counter: MaybeProp<String>,

    /// Actions (buttons) on the right
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{move || title.get()}</h1>
                {move || counter.get().map(|c| view! {
                    <span class="badge badge--primary">{c}</span>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
