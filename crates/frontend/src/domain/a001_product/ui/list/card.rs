use super::view_model::ViewMode;
use crate::shared::catalog_query::ProductCardView;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProductCard(card: ProductCardView, mode: ViewMode) -> impl IntoView {
    let class = match mode {
        ViewMode::Grid => "product-card product-card--grid",
        ViewMode::List => "product-card product-card--list",
    };
    let ProductCardView {
        name,
        href,
        image,
        price_label,
        old_price_label,
        discount_label,
        category_label,
        in_stock,
        stock_label,
        ..
    } = card;
    let stock_variant = if in_stock { "success" } else { "muted" };

    view! {
        <a class=class href=href>
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=name.clone() loading="lazy"/> }.into_any(),
                    None => view! { <div class="product-card__placeholder">{icon("package")}</div> }.into_any(),
                }}
                {discount_label.map(|d| view! {
                    <span class="product-card__discount"><Badge variant="sale">{d}</Badge></span>
                })}
            </div>
            <div class="product-card__body">
                {category_label.map(|c| view! { <div class="product-card__category">{c}</div> })}
                <div class="product-card__name">{name}</div>
                <div class="product-card__prices">
                    <span class="product-card__price">{price_label}</span>
                    {old_price_label.map(|p| view! { <s class="product-card__old-price">{p}</s> })}
                </div>
                <Badge variant=stock_variant>{stock_label}</Badge>
            </div>
        </a>
    }
}
