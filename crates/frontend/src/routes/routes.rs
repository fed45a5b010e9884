use crate::domain::a001_product::ui::list::{CategoryPage, ProductCatalogPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Страница не найдена"</h1>
            <a href="/">"Вернуться в каталог"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductCatalogPage />
                    <Route path=path!("/products") view=ProductCatalogPage />
                    <Route path=path!("/category/:category") view=CategoryPage />
                </Routes>
            </main>
        </Router>
    }
}
