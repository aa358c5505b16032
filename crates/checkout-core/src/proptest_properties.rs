//! Property-based tests using `proptest` for formatter and list invariants.
//!
//! 1. **Round trip**: parsing a formatted amount gives the amount back.
//! 2. **Shape**: one symbol occurrence, exactly two fraction digits.
//! 3. **Whole numbers**: `format_whole` output carries no decimal separator.
//! 4. **Compact suffix**: magnitudes of 1,000 and up always get `K` or `M`.
//! 5. **List totals**: `total == checked + remaining` for any list.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::format::{format_amount, format_compact, format_whole, parse_amount, AmountFormatter};
use crate::locale::LocaleTag;
use crate::types::{ShoppingItem, ShoppingList};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// A spread of separator styles: `.`/`,`, `,`/`.`, narrow space, apostrophe,
/// and lakh grouping.
const LOCALES: [&str; 6] = ["en_US", "de_DE", "fr_FR", "es_ES", "de_CH", "hi_IN"];

const SYMBOLS: [&str; 5] = ["$", "€", "£", "CHF", "zł"];

fn tag(s: &str) -> LocaleTag {
    let Ok(tag) = LocaleTag::parse(s) else {
        panic!("valid locale tag {s}");
    };
    tag
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Non-negative amounts with two decimal places, up to ten billion.
fn cents_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Signed amounts with two decimal places, for properties that hold for all.
fn signed_cents_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..=1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn locale_strategy() -> impl Strategy<Value = LocaleTag> {
    prop::sample::select(LOCALES.to_vec()).prop_map(tag)
}

fn symbol_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SYMBOLS.to_vec())
}

/// (quantity in hundredths, price in cents, checked)
fn item_strategy() -> impl Strategy<Value = ShoppingItem> {
    (0i64..=10_000i64, 0i64..=100_000i64, any::<bool>()).prop_map(|(qty, price, checked)| {
        let mut item = ShoppingItem::new(
            "Item",
            Decimal::new(qty, 2),
            "kg",
            Decimal::new(price, 2),
        );
        item.is_checked = checked;
        item
    })
}

// ---------------------------------------------------------------------------
// Property 1-3: Formatting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_format_then_parse_returns_amount(
        amount in cents_strategy(),
        locale in locale_strategy(),
        symbol in symbol_strategy(),
    ) {
        let formatted = format_amount(amount, symbol, &locale);
        let without_symbol = formatted.replace(symbol, "");

        prop_assert_eq!(
            parse_amount(&without_symbol, &locale),
            Some(amount),
            "formatted as {:?}",
            formatted
        );
    }

    #[test]
    fn prop_format_has_one_symbol_and_two_fraction_digits(
        amount in signed_cents_strategy(),
        locale in locale_strategy(),
        symbol in symbol_strategy(),
    ) {
        let formatted = format_amount(amount, symbol, &locale);
        prop_assert_eq!(formatted.matches(symbol).count(), 1);

        let number = formatted.replace(symbol, "");
        let separator = AmountFormatter::new(&locale).conventions().decimal_separator;
        let Some((_, fraction)) = number.trim().rsplit_once(separator) else {
            return Err(TestCaseError::fail(format!("no decimal separator in {formatted:?}")));
        };
        prop_assert_eq!(fraction.chars().count(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_format_whole_has_no_fraction(
        whole in 0i64..=10_000_000_000i64,
        locale in locale_strategy(),
    ) {
        let amount = Decimal::from(whole);
        let formatted = format_whole(amount, "€", &locale);
        let separator = AmountFormatter::new(&locale).conventions().decimal_separator;

        prop_assert!(!formatted.contains(separator), "got {:?}", formatted);
        prop_assert_eq!(parse_amount(&formatted, &locale), Some(amount));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Compact Notation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_compact_large_amounts_get_suffix(
        whole in 1_000i64..=1_000_000_000_000i64,
        negative in any::<bool>(),
    ) {
        let amount = if negative { -Decimal::from(whole) } else { Decimal::from(whole) };
        let formatted = format_compact(amount, "$", &LocaleTag::en_us());

        prop_assert!(
            formatted.ends_with('K') || formatted.ends_with('M'),
            "got {:?}",
            formatted
        );
    }

    #[test]
    fn prop_compact_small_amounts_have_no_suffix(cents in 0i64..100_000i64) {
        let amount = Decimal::new(cents, 2);
        let formatted = format_compact(amount, "$", &LocaleTag::en_us());

        prop_assert!(!formatted.ends_with('K') && !formatted.ends_with('M'));
    }
}

// ---------------------------------------------------------------------------
// Property 5: List Totals
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_total_is_checked_plus_remaining(
        items in prop::collection::vec(item_strategy(), 0..20),
    ) {
        let Ok(mut list) = ShoppingList::with_default_currency("Groceries") else {
            return Err(TestCaseError::fail("valid list"));
        };
        for item in items {
            prop_assert!(list.add_item(item).is_ok());
        }

        let totals = list.totals();
        prop_assert_eq!(totals.total, totals.checked + totals.remaining);
        prop_assert!(totals.checked <= totals.total);
        prop_assert!((0.0..=1.0).contains(&list.progress()));

        list.uncheck_all();
        prop_assert_eq!(list.remaining_amount(), list.total_amount());
    }
}
