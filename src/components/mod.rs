//! UI Components
//!
//! Reusable Leptos components.

mod product_card;
mod product_detail;

pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
