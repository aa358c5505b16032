//! # Amount Formatting
//!
//! Converts between decimal amounts and locale-aware strings carrying a
//! caller-supplied currency symbol.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format(1234.5, "€", es_ES)                                            │
//! │      │                                                                  │
//! │      ├──► render number   round half-to-even, 2 digits, "." / ","      │
//! │      │                    → "1.234,50"                                 │
//! │      │                                                                  │
//! │      ├──► probe placement render 1 in es_ES currency style             │
//! │      │                    → "1,00 €": no symbol before first digit     │
//! │      │                    → Suffix                                     │
//! │      │                                                                  │
//! │      └──► attach          → "1.234,50 €"                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Symbol Placement
//! Placement follows the locale, not the symbol: a `$` amount shown in a
//! German locale is suffixed. The probe inspects how the locale formats its
//! *own* currency and reuses that for any symbol. This is an approximation:
//! a locale may place foreign symbols differently from its native one.
//! When the probe is inconclusive (no currency pattern, no digit in the
//! sample), a short list of symbols known to lead is used instead.
//!
//! ## Failure Model
//! Formatting never fails outwardly. An internal rendering failure logs a
//! warning and degrades to `{symbol}0.00` (`{symbol}0` for whole numbers).
//! Parsing returns `None` when no number can be read; callers should keep
//! the previous value in that case instead of substituting zero.
//!
//! ## Round Trip
//! `parse_amount(format(a) minus symbol) == a` for non-negative amounts with
//! at most two fraction digits. With the symbol still attached this only
//! holds for symbols without digits or the decimal separator, and
//! `parse_amount` drops any minus sign.
//!
//! ## Usage
//! ```rust
//! use checkout_core::format::{format_amount, parse_amount};
//! use checkout_core::locale::LocaleTag;
//! use rust_decimal::Decimal;
//!
//! let us = LocaleTag::en_us();
//! assert_eq!(format_amount(Decimal::new(12345, 1), "$", &us), "$1,234.50");
//! assert_eq!(parse_amount("$1,234.50", &us), Some(Decimal::new(123450, 2)));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::locale::{LocaleTag, NumberConventions};

/// Symbols that lead the number when the locale probe cannot decide.
pub const PREFIX_SYMBOL_FALLBACK: [&str; 6] = ["$", "£", "¥", "₹", "₽", "₪"];

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

// =============================================================================
// Symbol Placement
// =============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPlacement {
    /// `$1.00` (no space)
    Prefix,
    /// `1,00 €` (one space)
    Suffix,
}

impl SymbolPlacement {
    /// Joins a rendered number and a symbol.
    pub fn attach(&self, number: &str, currency_symbol: &str) -> String {
        match self {
            SymbolPlacement::Prefix => format!("{}{}", currency_symbol, number),
            SymbolPlacement::Suffix => format!("{} {}", number, currency_symbol),
        }
    }

    /// Placement from the fixed fallback list.
    pub fn fallback_for(currency_symbol: &str) -> Self {
        if PREFIX_SYMBOL_FALLBACK.contains(&currency_symbol) {
            SymbolPlacement::Prefix
        } else {
            SymbolPlacement::Suffix
        }
    }

    /// Probes a locale's native currency style.
    ///
    /// Renders `1` with the locale's currency pattern and looks at what
    /// precedes the first digit. Anything other than whitespace means the
    /// symbol leads. `None` if there is no pattern or no digit.
    pub fn probe(conventions: &NumberConventions) -> Option<Self> {
        let sample = conventions.render_native_currency(Decimal::ONE)?;
        let (first_digit, _) = sample.char_indices().find(|(_, c)| c.is_numeric())?;

        let symbol_before = sample[..first_digit]
            .chars()
            .any(|c| !c.is_whitespace() && !c.is_numeric());

        Some(if symbol_before {
            SymbolPlacement::Prefix
        } else {
            SymbolPlacement::Suffix
        })
    }
}

// =============================================================================
// Amount Formatter
// =============================================================================

/// Formats and parses amounts for one locale.
///
/// Cheap to build; holds a borrowed tag and the resolved static
/// conventions. Free functions below wrap it for one-off calls.
#[derive(Debug, Clone, Copy)]
pub struct AmountFormatter<'a> {
    locale: &'a LocaleTag,
    conventions: &'static NumberConventions,
    native_placement: Option<SymbolPlacement>,
}

impl<'a> AmountFormatter<'a> {
    pub fn new(locale: &'a LocaleTag) -> Self {
        let conventions = NumberConventions::for_locale(locale);
        AmountFormatter {
            locale,
            conventions,
            native_placement: SymbolPlacement::probe(conventions),
        }
    }

    pub fn locale(&self) -> &LocaleTag {
        self.locale
    }

    pub fn conventions(&self) -> &'static NumberConventions {
        self.conventions
    }

    /// Decides prefix vs suffix for `currency_symbol` in this locale.
    pub fn placement(&self, currency_symbol: &str) -> SymbolPlacement {
        self.native_placement.unwrap_or_else(|| {
            let placement = SymbolPlacement::fallback_for(currency_symbol);
            debug!(
                locale = %self.locale,
                symbol = currency_symbol,
                ?placement,
                "Currency probe inconclusive, using symbol fallback"
            );
            placement
        })
    }

    /// Renders a bare number (no symbol) with `min..=max` fraction digits.
    ///
    /// Used for quantities. Falls back to `"0"` on internal failure.
    pub fn format_number(&self, amount: Decimal, min_fraction: u32, max_fraction: u32) -> String {
        self.conventions
            .render_decimal(amount, min_fraction, max_fraction)
            .unwrap_or_else(|| {
                warn!(locale = %self.locale, %amount, "Number rendering failed");
                "0".to_string()
            })
    }

    /// Formats with exactly two fraction digits.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::format::AmountFormatter;
    /// use checkout_core::locale::LocaleTag;
    /// use rust_decimal::Decimal;
    ///
    /// let es: LocaleTag = "es_ES".parse().unwrap();
    /// let formatter = AmountFormatter::new(&es);
    /// assert_eq!(formatter.format(Decimal::new(12345, 1), "€"), "1.234,50 €");
    /// ```
    pub fn format(&self, amount: Decimal, currency_symbol: &str) -> String {
        self.format_with_digits(amount, currency_symbol, 2, "0.00")
    }

    /// Formats rounded to a whole number.
    pub fn format_whole(&self, amount: Decimal, currency_symbol: &str) -> String {
        self.format_with_digits(amount, currency_symbol, 0, "0")
    }

    fn format_with_digits(
        &self,
        amount: Decimal,
        currency_symbol: &str,
        fraction_digits: u32,
        zero: &str,
    ) -> String {
        let rendered = self
            .conventions
            .render_decimal(amount, fraction_digits, fraction_digits);
        self.attach_or_zero(rendered, amount, currency_symbol, zero)
    }

    /// Attaches the symbol to a rendered number, or degrades to
    /// `{symbol}{zero}` when rendering produced nothing.
    ///
    /// `render_decimal` only fails on a non-ASCII digit string, which
    /// `Decimal`'s `Display` does not produce; the `None` arm is a guard.
    fn attach_or_zero(
        &self,
        rendered: Option<String>,
        amount: Decimal,
        currency_symbol: &str,
        zero: &str,
    ) -> String {
        match rendered {
            Some(number) => self.placement(currency_symbol).attach(&number, currency_symbol),
            None => {
                warn!(
                    locale = %self.locale,
                    %amount,
                    "Amount rendering failed, showing zero"
                );
                format!("{}{}", currency_symbol, zero)
            }
        }
    }

    /// Formats with K / M suffixes for large magnitudes.
    ///
    /// ```text
    /// |amount| ≥ 1,000,000   → amount / 1e6, ≤ 1 fraction digit, "M"
    /// |amount| ≥ 1,000       → amount / 1e3, ≤ 1 fraction digit, "K"
    /// otherwise              → ≤ 2 fraction digits, no suffix
    /// ```
    ///
    /// The thousands branch never switches to `M`: `999,999` is `1,000K`.
    pub fn format_compact(&self, amount: Decimal, currency_symbol: &str) -> String {
        let number = self.compact_number(amount).unwrap_or_else(|| {
            warn!(locale = %self.locale, %amount, "Compact rendering failed, showing zero");
            "0".to_string()
        });
        self.placement(currency_symbol).attach(&number, currency_symbol)
    }

    fn compact_number(&self, amount: Decimal) -> Option<String> {
        let magnitude = amount.abs();
        let million = Decimal::from(1_000_000u32);

        if magnitude < THOUSAND {
            return self.conventions.render_decimal(amount, 0, 2);
        }

        if magnitude < million {
            let thousands = amount.checked_div(THOUSAND)?;
            let number = self.conventions.render_decimal(thousands, 0, 1)?;
            return Some(format!("{}K", number));
        }

        let millions = amount.checked_div(million)?;
        let number = self.conventions.render_decimal(millions, 0, 1)?;
        Some(format!("{}M", number))
    }

    /// Parses user-typed text into a decimal.
    ///
    /// ## Rules
    /// - Keep only ASCII digits and this locale's decimal separator
    ///   (symbols, spaces, grouping separators and signs are dropped)
    /// - No digit left, or more than one separator → `None`
    /// - `",5"` reads as `0.5`; a trailing separator is ignored
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::format::AmountFormatter;
    /// use checkout_core::locale::LocaleTag;
    /// use rust_decimal::Decimal;
    ///
    /// let de: LocaleTag = "de_DE".parse().unwrap();
    /// let formatter = AmountFormatter::new(&de);
    /// assert_eq!(formatter.parse_amount("1.234,50 €"), Some(Decimal::new(123450, 2)));
    /// assert_eq!(formatter.parse_amount("abc"), None);
    /// ```
    pub fn parse_amount(&self, text: &str) -> Option<Decimal> {
        let separator = self.conventions.decimal_separator;

        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == separator)
            .collect();

        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        if cleaned.matches(separator).count() > 1 {
            debug!(locale = %self.locale, input = text, "Ambiguous amount, several separators");
            return None;
        }

        let mut normalized: String = cleaned
            .chars()
            .map(|c| if c == separator { '.' } else { c })
            .collect();
        if normalized.ends_with('.') {
            normalized.pop();
        }
        if normalized.starts_with('.') {
            normalized.insert(0, '0');
        }

        Decimal::from_str(&normalized).ok()
    }
}

// =============================================================================
// One-off Entry Points
// =============================================================================

/// Formats `amount` with two fraction digits and `currency_symbol`.
pub fn format_amount(amount: Decimal, currency_symbol: &str, locale: &LocaleTag) -> String {
    AmountFormatter::new(locale).format(amount, currency_symbol)
}

/// Formats `amount` rounded to a whole number.
pub fn format_whole(amount: Decimal, currency_symbol: &str, locale: &LocaleTag) -> String {
    AmountFormatter::new(locale).format_whole(amount, currency_symbol)
}

/// Formats `amount` in compact K / M notation.
pub fn format_compact(amount: Decimal, currency_symbol: &str, locale: &LocaleTag) -> String {
    AmountFormatter::new(locale).format_compact(amount, currency_symbol)
}

/// Parses free text into a decimal, `None` if no number is present.
pub fn parse_amount(text: &str, locale: &LocaleTag) -> Option<Decimal> {
    AmountFormatter::new(locale).parse_amount(text)
}

/// Prefix or suffix placement for `currency_symbol` in `locale`.
pub fn symbol_placement(locale: &LocaleTag, currency_symbol: &str) -> SymbolPlacement {
    AmountFormatter::new(locale).placement(currency_symbol)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::parse(s).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_us() {
        let us = LocaleTag::en_us();
        assert_eq!(format_amount(dec("1234.5"), "$", &us), "$1,234.50");
        assert_eq!(format_amount(dec("0"), "$", &us), "$0.00");
        assert_eq!(format_amount(dec("0.005"), "$", &us), "$0.00");
        assert_eq!(format_amount(dec("0.015"), "$", &us), "$0.02");
        assert_eq!(format_amount(dec("1000000"), "$", &us), "$1,000,000.00");
    }

    #[test]
    fn test_format_spanish_suffixes_and_swaps_separators() {
        let es = tag("es_ES");
        assert_eq!(format_amount(dec("1234.5"), "€", &es), "1.234,50 €");
        // Placement follows the locale, not the symbol
        assert_eq!(format_amount(dec("1234.5"), "$", &es), "1.234,50 $");
    }

    #[test]
    fn test_format_prefix_locales_with_space_in_pattern() {
        // "R$ 1,00" still has a symbol before the digit
        assert_eq!(format_amount(dec("10"), "R$", &tag("pt_BR")), "R$10,00");
        assert_eq!(format_amount(dec("10"), "CHF", &tag("de_CH")), "CHF10.00");
    }

    #[test]
    fn test_format_negative_amounts() {
        let us = LocaleTag::en_us();
        assert_eq!(format_amount(dec("-5"), "$", &us), "$-5.00");
        assert_eq!(format_amount(dec("-1234.5"), "€", &tag("de_DE")), "-1.234,50 €");
    }

    #[test]
    fn test_format_large_scale_input() {
        let us = LocaleTag::en_us();
        assert_eq!(format_amount(dec("1.23456789"), "$", &us), "$1.23");
        assert_eq!(
            format_amount(Decimal::MAX, "$", &us),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_format_whole() {
        let us = LocaleTag::en_us();
        assert_eq!(format_whole(dec("999.6"), "$", &us), "$1,000");
        assert_eq!(format_whole(dec("2.5"), "$", &us), "$2");
        assert_eq!(format_whole(dec("3.5"), "$", &us), "$4");
        assert_eq!(format_whole(dec("1234.4"), "€", &tag("fr_FR")), "1\u{202f}234 €");
    }

    #[test]
    fn test_format_compact() {
        let us = LocaleTag::en_us();
        assert_eq!(format_compact(dec("1234567"), "$", &us), "$1.2M");
        assert_eq!(format_compact(dec("950"), "$", &us), "$950");
        assert_eq!(format_compact(dec("12.5"), "$", &us), "$12.5");
        assert_eq!(format_compact(dec("1500"), "$", &us), "$1.5K");
        assert_eq!(format_compact(dec("2000"), "$", &us), "$2K");
        assert_eq!(format_compact(dec("1000000"), "$", &us), "$1M");
        assert_eq!(format_compact(dec("-2500"), "$", &us), "$-2.5K");
        assert_eq!(format_compact(dec("1250000"), "€", &tag("de_DE")), "1,2M €");
    }

    #[test]
    fn test_format_compact_thousands_stay_in_k_below_a_million() {
        let us = LocaleTag::en_us();
        assert_eq!(format_compact(dec("999999"), "$", &us), "$1,000K");
        assert_eq!(format_compact(dec("999950"), "$", &us), "$1,000K");
        assert_eq!(format_compact(dec("999949"), "$", &us), "$999.9K");
        assert_eq!(format_compact(dec("-999999"), "$", &us), "$-1,000K");
        // Below a thousand no suffix is added, even when rounding reaches 1,000
        assert_eq!(format_compact(dec("999.995"), "$", &us), "$1,000");
    }

    #[test]
    fn test_format_latin_american_spanish() {
        let latam = tag("es_419");
        assert_eq!(format_amount(dec("1234.5"), "$", &latam), "$1,234.50");
        assert_eq!(parse_amount("$1,234.50", &latam), Some(dec("1234.50")));
    }

    #[test]
    fn test_probe_placement() {
        assert_eq!(symbol_placement(&LocaleTag::en_us(), "€"), SymbolPlacement::Prefix);
        assert_eq!(symbol_placement(&tag("de_DE"), "$"), SymbolPlacement::Suffix);
        assert_eq!(symbol_placement(&tag("de_AT"), "€"), SymbolPlacement::Prefix);
        assert_eq!(symbol_placement(&tag("nl_NL"), "€"), SymbolPlacement::Prefix);
        assert_eq!(symbol_placement(&tag("vi_VN"), "₫"), SymbolPlacement::Suffix);
    }

    #[test]
    fn test_probe_inconclusive_uses_fallback_list() {
        // Unknown locale: root conventions carry no currency pattern
        let unknown = tag("xx_YY");
        assert_eq!(symbol_placement(&unknown, "$"), SymbolPlacement::Prefix);
        assert_eq!(symbol_placement(&unknown, "₪"), SymbolPlacement::Prefix);
        assert_eq!(symbol_placement(&unknown, "€"), SymbolPlacement::Suffix);
        assert_eq!(symbol_placement(&unknown, "CHF"), SymbolPlacement::Suffix);
        assert_eq!(format_amount(dec("3"), "€", &unknown), "3.00 €");
    }

    #[test]
    fn test_probe_pattern_without_digits() {
        let conventions = NumberConventions {
            currency_pattern: Some("¤"),
            ..*NumberConventions::root()
        };
        assert_eq!(SymbolPlacement::probe(&conventions), None);
    }

    #[test]
    fn test_parse_amount() {
        let us = LocaleTag::en_us();
        assert_eq!(parse_amount("$1,234.50", &us), Some(dec("1234.50")));
        assert_eq!(parse_amount("  12 ", &us), Some(dec("12")));
        assert_eq!(parse_amount(".5", &us), Some(dec("0.5")));
        assert_eq!(parse_amount("5.", &us), Some(dec("5")));
        assert_eq!(parse_amount("", &us), None);
        assert_eq!(parse_amount("abc", &us), None);
        assert_eq!(parse_amount(".", &us), None);
        assert_eq!(parse_amount("1.2.3", &us), None);
    }

    #[test]
    fn test_parse_amount_comma_decimal_locale() {
        let de = tag("de_DE");
        assert_eq!(parse_amount("1.234,50 €", &de), Some(dec("1234.50")));
        assert_eq!(parse_amount(",75", &de), Some(dec("0.75")));
        // "." is grouping here, so it is discarded
        assert_eq!(parse_amount("1.5", &de), Some(dec("15")));
        assert_eq!(parse_amount("1,2,3", &de), None);
    }

    #[test]
    fn test_parse_drops_sign() {
        assert_eq!(parse_amount("-4.20", &LocaleTag::en_us()), Some(dec("4.20")));
    }

    #[test]
    fn test_parse_overflowing_input_is_not_found() {
        let huge = "9".repeat(40);
        assert_eq!(parse_amount(&huge, &LocaleTag::en_us()), None);
    }

    #[test]
    fn test_failed_render_degrades_to_zero() {
        let de = tag("de_DE");
        let formatter = AmountFormatter::new(&de);
        // Symbol leads on the fallback even in a suffix locale
        assert_eq!(formatter.attach_or_zero(None, dec("12.5"), "€", "0.00"), "€0.00");
        assert_eq!(formatter.attach_or_zero(None, dec("12.5"), "$", "0"), "$0");
        assert_eq!(
            formatter.attach_or_zero(Some("12,50".to_string()), dec("12.5"), "€", "0.00"),
            "12,50 €"
        );
    }

    #[test]
    fn test_formatter_exposes_resolved_conventions() {
        let es = tag("es_ES");
        let formatter = AmountFormatter::new(&es);
        assert_eq!(formatter.conventions().decimal_separator, ',');
        assert_eq!(formatter.conventions(), NumberConventions::for_locale(&es));
    }

    #[test]
    fn test_formatter_reuse_matches_free_functions() {
        let fr = tag("fr_FR");
        let formatter = AmountFormatter::new(&fr);
        assert_eq!(formatter.locale(), &fr);
        assert_eq!(
            formatter.format(dec("42.1"), "€"),
            format_amount(dec("42.1"), "€", &fr)
        );
        assert_eq!(formatter.format_number(dec("1.50"), 0, 2), "1,5");
    }
}
