use leptos::prelude::*;

/// Badge on a product card: discount, stock state, category
#[component]
pub fn Badge(
    /// Badge variant: "sale", "success", "warning", "muted" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("muted") {
        "sale" => "badge--error",
        "success" => "badge--success",
        "warning" => "badge--warning",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
