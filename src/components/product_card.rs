//! Product Card Component
//!
//! Summary card for the catalog grid. The whole card is click-sensitive
//! and selects the product.

use leptos::prelude::*;

use crate::currency::format_price;
use crate::models::Product;

/// Product summary card
#[component]
pub fn ProductCard(product: Product, #[prop(into)] on_select: Callback<()>) -> impl IntoView {
    let currency = product.price.currency.clone();
    let price_label = format_price(product.price.price, &currency);
    let compare_at_label = product
        .price
        .compare_at_price
        .map(|amount| format_price(amount, &currency));
    let first_image = product.image_urls.first().cloned();

    view! {
        <div class="product-card" on:click=move |_| on_select.run(())>
            {match first_image {
                Some(url) => view! {
                    <img class="product-card-image" src=url alt=product.name.clone()/>
                }.into_any(),
                None => view! {
                    <div class="product-card-image placeholder">"No image"</div>
                }.into_any(),
            }}

            <p class="product-card-brand">{product.brand.clone()}</p>
            <h3 class="product-card-name">{product.name.clone()}</h3>

            <div class="product-card-price">
                <span>{price_label}</span>
                {compare_at_label.map(|label| view! {
                    <span class="compare-at">{label}</span>
                })}
            </div>
        </div>
    }
}
