//! Product Detail Component
//!
//! Expanded product view with image gallery, color pills, and size picker.

use leptos::prelude::*;

use crate::currency::format_price;
use crate::models::Product;
use crate::variants::{size_available, unique_sizes};

/// Thumbnails shown under the main image
const MAX_THUMBNAILS: usize = 4;

/// Full product view
#[component]
pub fn ProductDetail(product: Product, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let (selected_image, set_selected_image) = signal(0usize);
    // Indexes into the deduplicated size list, not the raw variant list
    let (selected_variant, set_selected_variant) = signal::<Option<usize>>(None);

    let sizes = unique_sizes(&product.variants);
    let size_entries: Vec<(usize, String, bool)> = sizes
        .into_iter()
        .enumerate()
        .map(|(i, size)| {
            let available = size_available(&product.variants, &size);
            (i, size, available)
        })
        .collect();

    let currency = product.price.currency.clone();
    let price_label = format_price(product.price.price, &currency);
    let compare_at_label = product
        .price
        .compare_at_price
        .map(|amount| format_price(amount, &currency));

    let name = product.name.clone();
    let images = product.image_urls.clone();

    view! {
        <div class="product-detail">
            <button class="back-btn" on:click=move |_| on_back.run(())>
                "← Back to catalog"
            </button>

            <div class="product-detail-layout">
                // Left: image gallery
                <div class="product-gallery">
                    {if images.is_empty() {
                        view! {
                            <div class="product-image placeholder">"No image available"</div>
                        }.into_any()
                    } else {
                        let main_images = images.clone();
                        let thumbnails: Vec<(usize, String)> = images
                            .iter()
                            .cloned()
                            .take(MAX_THUMBNAILS)
                            .enumerate()
                            .collect();
                        let show_thumbnails = images.len() > 1;
                        view! {
                            <img
                                class="product-image"
                                src=move || {
                                    main_images.get(selected_image.get()).cloned().unwrap_or_default()
                                }
                                alt=name.clone()
                            />
                            {show_thumbnails.then(|| view! {
                                <div class="thumbnail-row">
                                    {thumbnails.into_iter().map(|(i, url)| {
                                        let thumb_class = move || {
                                            if selected_image.get() == i {
                                                "thumbnail active"
                                            } else {
                                                "thumbnail"
                                            }
                                        };
                                        view! {
                                            <img
                                                class=thumb_class
                                                src=url
                                                on:click=move |_| set_selected_image.set(i)
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            })}
                        }.into_any()
                    }}
                </div>

                // Right: product info
                <div class="product-info">
                    <p class="product-brand">{product.brand.clone()}</p>
                    <h1 class="product-name">{product.name.clone()}</h1>

                    <div class="product-price">
                        <span>{price_label}</span>
                        {compare_at_label.map(|label| view! {
                            <span class="compare-at">{label}</span>
                        })}
                    </div>

                    {(!product.colors.is_empty()).then(|| view! {
                        <div class="product-colors">
                            <p class="section-label">"Colors"</p>
                            <div class="color-pills">
                                {product.colors.iter().map(|color| view! {
                                    <span class="color-pill">{color.clone()}</span>
                                }).collect_view()}
                            </div>
                        </div>
                    })}

                    {(!size_entries.is_empty()).then(|| view! {
                        <div class="product-sizes">
                            <p class="section-label">"Size"</p>
                            <div class="size-buttons">
                                {size_entries.iter().map(|(i, size, available)| {
                                    let index = *i;
                                    let available = *available;
                                    let size_class = move || {
                                        if !available {
                                            "size-btn unavailable"
                                        } else if selected_variant.get() == Some(index) {
                                            "size-btn selected"
                                        } else {
                                            "size-btn"
                                        }
                                    };
                                    view! {
                                        <button
                                            class=size_class
                                            disabled=!available
                                            on:click=move |_| {
                                                if available {
                                                    set_selected_variant.set(Some(index));
                                                }
                                            }
                                        >
                                            {size.clone()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })}

                    <p class="product-description">{product.description.clone()}</p>

                    {(!product.key_features.is_empty()).then(|| view! {
                        <ul class="product-features">
                            {product.key_features.iter().map(|feature| view! {
                                <li>{feature.clone()}</li>
                            }).collect_view()}
                        </ul>
                    })}
                </div>
            </div>
        </div>
    }
}
