//! Currency Formatting
//!
//! Pure helpers for rendering prices.

/// Symbol for a known three-letter currency code
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "EUR" => Some("€"),
        "JPY" => Some("¥"),
        "CAD" => Some("C$"),
        "AUD" => Some("A$"),
        _ => None,
    }
}

/// Format an amount with its currency symbol
///
/// Unknown codes fall back to the code itself plus a trailing space.
/// Amounts always carry two decimals, zero-decimal currencies such as
/// JPY included (see DESIGN.md).
pub fn format_price(amount: f64, currency: &str) -> String {
    match currency_symbol(currency) {
        Some(symbol) => format!("{}{:.2}", symbol, amount),
        None => format!("{} {:.2}", currency, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(currency_symbol("USD"), Some("$"));
        assert_eq!(currency_symbol("GBP"), Some("£"));
        assert_eq!(currency_symbol("EUR"), Some("€"));
        assert_eq!(currency_symbol("JPY"), Some("¥"));
        assert_eq!(currency_symbol("CAD"), Some("C$"));
        assert_eq!(currency_symbol("AUD"), Some("A$"));
        assert_eq!(currency_symbol("XYZ"), None);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_price(9.5, "USD"), "$9.50");
    }

    #[test]
    fn test_format_jpy_keeps_two_decimals() {
        assert_eq!(format_price(9.5, "JPY"), "¥9.50");
    }

    #[test]
    fn test_format_unknown_code_falls_back() {
        assert_eq!(format_price(3.0, "XYZ"), "XYZ 3.00");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        assert_eq!(format_price(10.0, "EUR"), "€10.00");
        assert_eq!(format_price(1299.999, "USD"), "$1300.00");
    }
}
