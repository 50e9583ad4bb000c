//! Product Data Model
//!
//! Value records matching the static catalog dataset.

use serde::{Deserialize, Serialize};

/// Product pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub price: f64,
    /// Three-letter currency code
    pub currency: String,
    /// Original price, shown struck through when the product is on sale
    #[serde(default)]
    pub compare_at_price: Option<f64>,
}

/// Product category (stored, not rendered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A purchasable configuration of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Variants without a size stay out of the size picker
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Per-variant price override (stored, not rendered)
    #[serde(default)]
    pub price: Option<Price>,
    /// Absent flag means purchasable
    #[serde(default = "default_true")]
    pub aval: bool,
}

fn default_true() -> bool {
    true
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub key_features: Vec<String>,
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub category: Category,
    pub brand: String,
    pub colors: Vec<String>,
    pub variants: Vec<Variant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_aval_defaults_true() {
        let variant: Variant = serde_json::from_str(r#"{"size": "M"}"#).unwrap();
        assert!(variant.aval);
        assert_eq!(variant.size.as_deref(), Some("M"));
        assert!(variant.sku.is_none());
        assert!(variant.price.is_none());
    }

    #[test]
    fn test_compare_at_price_optional() {
        let price: Price =
            serde_json::from_str(r#"{"price": 9.5, "currency": "USD", "compare_at_price": null}"#)
                .unwrap();
        assert_eq!(price.compare_at_price, None);

        let price: Price = serde_json::from_str(r#"{"price": 9.5, "currency": "USD"}"#).unwrap();
        assert_eq!(price.compare_at_price, None);
    }
}
