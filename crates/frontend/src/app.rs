use crate::domain::a001_product::api::HttpProductSource;
use crate::domain::a002_category::CategoryCache;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Сервисы передаются через контекст, а не через глобальные переменные
    provide_context(HttpProductSource::from_location());
    provide_context(CategoryCache::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
