//! # checkout-settings: User Settings for Checkout Hero
//!
//! Everything that touches the environment lives here so `checkout-core`
//! can stay pure: the settings file, `CHECKOUT_*` variables, the OS locale,
//! and the tracing subscriber.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  init_tracing()                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Settings::load_or_default(None)                                       │
//! │       │   defaults → settings.toml → CHECKOUT_* env → validate         │
//! │       ▼                                                                 │
//! │  settings.locale()                                                      │
//! │       │   "system" → LC_ALL / LC_NUMERIC / LANG                        │
//! │       ▼                                                                 │
//! │  LocaleTag ──► checkout_core::AmountFormatter::new(&locale)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use checkout_core::{format_amount, LocaleTag};
//! use checkout_settings::{LanguagePreference, Settings};
//! use rust_decimal::Decimal;
//!
//! let mut settings = Settings::default();
//! settings.display.language = "es_ES".parse::<LanguagePreference>().unwrap();
//!
//! let locale = settings.resolve_locale(&LocaleTag::en_us());
//! assert_eq!(format_amount(Decimal::new(12345, 1), "€", &locale), "1.234,50 €");
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod logging;

pub use config::{DisplaySettings, Settings};
pub use error::{SettingsError, SettingsResult};
pub use language::{system_locale, LanguagePreference};
pub use logging::init_tracing;
