//! # Currency Table
//!
//! The common currencies offered when picking a list's symbol.
//!
//! Lists store only a symbol string, and any custom symbol is allowed. This
//! table exists for the picker and for display names; it is NOT consulted
//! for symbol placement (see [`crate::format`]) or for validation.

use serde::Serialize;

/// A picker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    /// ISO 4217 code.
    pub code: &'static str,
}

const fn currency(symbol: &'static str, name: &'static str, code: &'static str) -> CurrencyInfo {
    CurrencyInfo { symbol, name, code }
}

static COMMON_CURRENCIES: [CurrencyInfo; 20] = [
    currency("$", "US Dollar", "USD"),
    currency("€", "Euro", "EUR"),
    currency("£", "British Pound", "GBP"),
    currency("¥", "Japanese Yen", "JPY"),
    currency("¥", "Chinese Yuan", "CNY"),
    currency("₹", "Indian Rupee", "INR"),
    currency("R$", "Brazilian Real", "BRL"),
    currency("₽", "Russian Ruble", "RUB"),
    currency("₪", "Israeli Shekel", "ILS"),
    currency("CHF", "Swiss Franc", "CHF"),
    currency("A$", "Australian Dollar", "AUD"),
    currency("C$", "Canadian Dollar", "CAD"),
    currency("₩", "South Korean Won", "KRW"),
    currency("MX$", "Mexican Peso", "MXN"),
    currency("₱", "Philippine Peso", "PHP"),
    currency("฿", "Thai Baht", "THB"),
    currency("₫", "Vietnamese Dong", "VND"),
    currency("zł", "Polish Zloty", "PLN"),
    currency("kr", "Swedish Krona", "SEK"),
    currency("kr", "Norwegian Krone", "NOK"),
];

/// All picker entries, in display order.
pub fn common_currencies() -> &'static [CurrencyInfo] {
    &COMMON_CURRENCIES
}

/// Symbol for an ISO code (case-insensitive).
///
/// ## Example
/// ```rust
/// use checkout_core::currency::currency_symbol_for;
///
/// assert_eq!(currency_symbol_for("brl"), Some("R$"));
/// assert_eq!(currency_symbol_for("XYZ"), None);
/// ```
pub fn currency_symbol_for(code: &str) -> Option<&'static str> {
    COMMON_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
        .map(|c| c.symbol)
}

/// Display name for a symbol. Shared symbols resolve to the first entry
/// (`¥` → Japanese Yen, `kr` → Swedish Krona).
pub fn currency_name_for(symbol: &str) -> Option<&'static str> {
    COMMON_CURRENCIES
        .iter()
        .find(|c| c.symbol == symbol)
        .map(|c| c.name)
}
