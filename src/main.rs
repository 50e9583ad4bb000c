//! Catalog UI Frontend Entry Point

mod app;
mod components;
mod currency;
mod data;
mod models;
mod variants;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let products = data::load_products();
    mount_to_body(move || view! { <App products=products/> });
}
