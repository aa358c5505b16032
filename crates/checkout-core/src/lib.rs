//! # checkout-core: Amount Formatting and Shopping Lists for Checkout Hero
//!
//! This crate holds the logic behind every price the app shows: locale-aware
//! amount formatting with a caller-chosen currency symbol, parsing of typed
//! amounts, and the shopping list model whose totals feed those formatters.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Hero Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         UI Layer                                │   │
//! │  │    List Screen ──► Item Editor ──► Totals Card ──► Settings    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               checkout-settings                                 │   │
//! │  │    language preference, settings.toml, env, tracing setup      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ resolved LocaleTag                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  locale   │  │  format   │  │   types   │  │ validation│  │   │
//! │  │   │ LocaleTag │  │  Amount   │  │ Shopping  │  │   rules   │  │   │
//! │  │   │ separators│  │ Formatter │  │ List/Item │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO OS LOCALE LOOKUP • LOCALE PASSED EXPLICITLY      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`locale`] - Locale tags and their number conventions
//! - [`format`] - Amount formatting, compact notation, parsing
//! - [`currency`] - Common currency picker table
//! - [`types`] - Shopping lists and items
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Decimal Amounts**: Money and quantities are `rust_decimal::Decimal`, never floats
//! 2. **Explicit Locale**: Every formatting call takes a [`LocaleTag`]
//! 3. **Formatting Never Fails**: Render errors degrade to `{symbol}0.00` and log
//! 4. **Parsing Can**: [`parse_amount`] returns `None`, never a silent zero
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{format_amount, LocaleTag, ShoppingItem, ShoppingList};
//! use rust_decimal::Decimal;
//!
//! let mut list = ShoppingList::new("Weekend", "€").unwrap();
//! list.add_item(ShoppingItem::new("Coffee", Decimal::ONE, "bag", Decimal::new(1234, 2)))
//!     .unwrap();
//!
//! let de: LocaleTag = "de_DE".parse().unwrap();
//! assert_eq!(list.formatted_total(&de), "12,34 €");
//! assert_eq!(format_amount(Decimal::new(12345, 1), "$", &LocaleTag::en_us()), "$1,234.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod locale;
pub mod types;
pub mod validation;

#[cfg(test)]
mod proptest_properties;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, LocaleError, ValidationError};
pub use format::{
    format_amount, format_compact, format_whole, parse_amount, AmountFormatter, SymbolPlacement,
};
pub use locale::{LocaleTag, MeasurementSystem, NumberConventions};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Symbol given to new lists when none is chosen.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Maximum length of list and item names, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a currency symbol, in characters.
///
/// Long enough for "CHF" or "MX$" and a few custom ones, short enough to fit
/// the totals card.
pub const MAX_CURRENCY_SYMBOL_LENGTH: usize = 8;
