//! Catalog Root
//!
//! Top-level component owning the product selection state and switching
//! between the card grid and the detail view.

use leptos::prelude::*;

use crate::components::{ProductCard, ProductDetail};
use crate::models::Product;

#[component]
pub fn App(products: Vec<Product>) -> impl IntoView {
    // None = grid view, Some = detail view
    let (selected_product, set_selected_product) = signal::<Option<Product>>(None);

    view! {
        {move || match selected_product.get() {
            Some(product) => view! {
                <ProductDetail
                    product=product
                    on_back=move || set_selected_product.set(None)
                />
            }.into_any(),
            None => {
                let products = products.clone();
                view! {
                    <div class="catalog">
                        <h1 class="catalog-title">"Product Catalog"</h1>
                        <div class="catalog-grid">
                            <For
                                each=move || products.clone().into_iter().enumerate()
                                key=|(i, _)| *i
                                children=move |(_, product)| {
                                    let selected = product.clone();
                                    view! {
                                        <ProductCard
                                            product=product
                                            on_select=move || {
                                                set_selected_product.set(Some(selected.clone()))
                                            }
                                        />
                                    }
                                }
                            />
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
