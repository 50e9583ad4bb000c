//! Variant Sizing Helpers
//!
//! Derived state for the detail view's size picker.

use crate::models::Variant;

/// Non-null sizes across variants, deduplicated preserving first-occurrence order
pub fn unique_sizes(variants: &[Variant]) -> Vec<String> {
    let mut sizes: Vec<String> = Vec::new();
    for variant in variants {
        if let Some(size) = &variant.size {
            if !sizes.iter().any(|s| s == size) {
                sizes.push(size.clone());
            }
        }
    }
    sizes
}

/// Whether a size is selectable
///
/// Resolved from the first variant in the raw list whose size matches;
/// later variants sharing the size do not contribute (see DESIGN.md).
pub fn size_available(variants: &[Variant], size: &str) -> bool {
    variants
        .iter()
        .find(|v| v.size.as_deref() == Some(size))
        .map(|v| v.aval)
        .unwrap_or(false)
}
