//! Catalog Dataset
//!
//! The product catalog ships as a JSON document embedded at compile time.

use crate::models::Product;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");

fn parse_products(json: &str) -> serde_json::Result<Vec<Product>> {
    serde_json::from_str(json)
}

/// Load the embedded catalog
///
/// A dataset that fails to parse yields an empty catalog instead of a panic.
pub fn load_products() -> Vec<Product> {
    match parse_products(PRODUCTS_JSON) {
        Ok(products) => {
            web_sys::console::log_1(
                &format!("[DATA] Loaded {} products", products.len()).into(),
            );
            products
        }
        Err(err) => {
            web_sys::console::error_1(
                &format!("[DATA] Failed to parse products.json: {}", err).into(),
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let products = parse_products(PRODUCTS_JSON).expect("products.json should parse");
        assert!(!products.is_empty());
    }

    #[test]
    fn test_dataset_order_is_preserved() {
        let products = parse_products(PRODUCTS_JSON).unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Trailhead Merino Crew Tee",
                "Fellside Enamel Pour-Over Kettle",
                "Atlas Canvas Weekender",
                "Kumo Ceramic Brew Dripper",
            ]
        );
    }

    #[test]
    fn test_dataset_shape_assumptions() {
        let products = parse_products(PRODUCTS_JSON).unwrap();
        for product in &products {
            assert!(!product.name.is_empty());
            assert_eq!(product.price.currency.len(), 3);
            // Empty image lists are allowed, empty URLs are not
            assert!(product.image_urls.iter().all(|url| !url.is_empty()));
        }
    }

    #[test]
    fn test_garbage_dataset_is_an_error() {
        assert!(parse_products("not json").is_err());
        assert!(parse_products(r#"[{"name": "missing fields"}]"#).is_err());
    }
}
