//! # Locale Module
//!
//! Locale tags and the number-formatting conventions they select.
//!
//! ## Where Conventions Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  LocaleTag ──► NumberConventions                        │
//! │                                                                         │
//! │  "pt-BR" ──parse──► LocaleTag { pt, BR }                               │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  1. exact match (pt, BR)          ──► found: use it                    │
//! │  2. language default (pt → BR)    ──► "pt" alone resolves here         │
//! │  3. root conventions              ──► "." decimal, "," grouping,       │
//! │                                        NO currency pattern             │
//! │                                                                         │
//! │  The table is static data compiled into the crate. Nothing here reads  │
//! │  the OS locale: callers pass a tag explicitly.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::locale::{LocaleTag, NumberConventions};
//!
//! let locale: LocaleTag = "de-DE".parse().unwrap();
//! let conventions = NumberConventions::for_locale(&locale);
//! assert_eq!(conventions.decimal_separator, ',');
//! assert_eq!(conventions.grouping_separator, '.');
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

// =============================================================================
// Locale Tag
// =============================================================================

/// An explicit locale identifier: `language[_Script][_REGION]`.
///
/// ## Accepted Input
/// - `-` or `_` as separator, any letter case (`en-us`, `EN_US`)
/// - POSIX suffixes are dropped (`en_US.UTF-8`, `de_DE@euro`)
/// - Language: 2-3 ASCII letters
/// - Script (optional): 4 ASCII letters
/// - Region (optional): 2 ASCII letters or 3 digits
///
/// Displays in the canonical `en_US` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleTag {
    /// Parses a locale tag.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::locale::LocaleTag;
    ///
    /// let tag = LocaleTag::parse("es-es").unwrap();
    /// assert_eq!(tag.to_string(), "es_ES");
    /// assert!(LocaleTag::parse("").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LocaleError> {
        let invalid = |reason: &str| LocaleError::InvalidTag {
            tag: input.to_string(),
            reason: reason.to_string(),
        };

        // Drop POSIX codeset / modifier suffixes
        let core = input
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        let mut parts = core.split(['-', '_']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid("language must be 2-3 ASCII letters"));
        }

        let mut script = None;
        let mut region = None;

        for part in parts {
            let is_alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            let is_digit = part.chars().all(|c| c.is_ascii_digit());

            match part.len() {
                4 if is_alpha && script.is_none() && region.is_none() => {
                    let mut s = part.to_ascii_lowercase();
                    s[..1].make_ascii_uppercase();
                    script = Some(s);
                }
                2 if is_alpha && region.is_none() => {
                    region = Some(part.to_ascii_uppercase());
                }
                3 if is_digit && region.is_none() => {
                    region = Some(part.to_string());
                }
                _ => return Err(invalid("expected language[-Script][-REGION]")),
            }
        }

        Ok(LocaleTag {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }

    /// US English, the formatting baseline used throughout the tests.
    pub fn en_us() -> Self {
        LocaleTag {
            language: "en".to_string(),
            script: None,
            region: Some("US".to_string()),
        }
    }

    /// The root locale (`und`): neutral separators and no currency pattern.
    pub fn root() -> Self {
        LocaleTag {
            language: "und".to_string(),
            script: None,
            region: None,
        }
    }

    /// Lowercase language subtag (`en`, `pt`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Title-case script subtag, if present (`Hant`).
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase region subtag, if present (`US`, `BR`).
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Region used for lookups: the explicit one or the language default.
    fn effective_region(&self) -> Option<&str> {
        self.region().or_else(|| {
            LANGUAGE_DEFAULT_REGIONS
                .iter()
                .find(|(language, _)| *language == self.language)
                .map(|(_, region)| *region)
        })
    }

    /// Measurement system conventionally used in this locale's region.
    pub fn measurement_system(&self) -> MeasurementSystem {
        match self.effective_region() {
            Some("US" | "LR" | "MM") => MeasurementSystem::Us,
            _ => MeasurementSystem::Metric,
        }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "_{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "_{}", region)?;
        }
        Ok(())
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleTag::parse(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LocaleTag::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.to_string()
    }
}

// =============================================================================
// Measurement System
// =============================================================================

/// Metric vs US customary units, used to suggest default item units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    Metric,
    Us,
}

impl MeasurementSystem {
    /// Default weight unit for new items.
    pub const fn preferred_weight_unit(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "kg",
            MeasurementSystem::Us => "lb",
        }
    }

    /// Default volume unit for new items.
    pub const fn preferred_volume_unit(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "L",
            MeasurementSystem::Us => "gal",
        }
    }
}

// =============================================================================
// Number Conventions
// =============================================================================

/// Number-formatting conventions for one locale.
///
/// ## Currency Pattern
/// A CLDR-style pattern such as `¤#,##0.00` or `#,##0.00 ¤`. Only the
/// positive sub-pattern (before `;`) is used. `¤` is the native currency
/// symbol; the run of `# 0 , .` is the number. `None` means the locale
/// has no native currency format, which makes symbol-placement probing
/// inconclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    /// Separates integer and fraction digits.
    pub decimal_separator: char,
    /// Separates digit groups in the integer part.
    pub grouping_separator: char,
    /// Size of the rightmost digit group (3 almost everywhere).
    pub primary_group: usize,
    /// Size of every further group (2 for Indian lakh/crore grouping).
    pub secondary_group: usize,
    /// Native currency pattern.
    pub currency_pattern: Option<&'static str>,
    /// Native currency symbol substituted for `¤`.
    pub currency_symbol: &'static str,
}

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';
const APOSTROPHE: char = '\u{2019}';

impl NumberConventions {
    const fn new(
        decimal_separator: char,
        grouping_separator: char,
        currency_pattern: &'static str,
        currency_symbol: &'static str,
    ) -> Self {
        NumberConventions {
            decimal_separator,
            grouping_separator,
            primary_group: 3,
            secondary_group: 3,
            currency_pattern: Some(currency_pattern),
            currency_symbol,
        }
    }

    const fn lakh(currency_symbol: &'static str) -> Self {
        NumberConventions {
            decimal_separator: '.',
            grouping_separator: ',',
            primary_group: 3,
            secondary_group: 2,
            currency_pattern: Some("¤#,##,##0.00"),
            currency_symbol,
        }
    }

    /// Resolves conventions for a locale tag.
    ///
    /// Exact language+region first, then the language's default region,
    /// then [`NumberConventions::root`]. Never fails.
    ///
    /// Numeric UN M.49 regions match only their own rows: `es_419` has one,
    /// while e.g. `fr_150` falls back to `fr_FR`.
    pub fn for_locale(locale: &LocaleTag) -> &'static NumberConventions {
        let lookup = |region: &str| {
            LOCALE_TABLE
                .iter()
                .find(|(language, r, _)| *language == locale.language() && *r == region)
                .map(|(_, _, conventions)| conventions)
        };

        locale
            .region()
            .and_then(&lookup)
            .or_else(|| {
                LANGUAGE_DEFAULT_REGIONS
                    .iter()
                    .find(|(language, _)| *language == locale.language())
                    .and_then(|(_, region)| lookup(*region))
            })
            .unwrap_or(&ROOT)
    }

    /// Conventions of the root locale.
    pub fn root() -> &'static NumberConventions {
        &ROOT
    }

    /// Renders a decimal with these separators and grouping.
    ///
    /// Rounds half-to-even at `max_fraction` digits, pads with zeros up to
    /// `min_fraction`, and trims trailing zeros between the two. Negative
    /// values get a leading `-`; values that round to zero never do.
    ///
    /// Returns `None` if the decimal's digit string is not plain ASCII
    /// digits, which the formatting layer treats as an internal failure.
    pub fn render_decimal(
        &self,
        amount: Decimal,
        min_fraction: u32,
        max_fraction: u32,
    ) -> Option<String> {
        let max_fraction = max_fraction.max(min_fraction);
        let rounded =
            amount.round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        if integer.is_empty()
            || !integer.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut fraction = fraction.to_string();
        while fraction.len() < min_fraction as usize {
            fraction.push('0');
        }
        while fraction.len() > min_fraction as usize && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group_digits(integer));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&fraction);
        }
        Some(out)
    }

    /// Inserts grouping separators into an ASCII digit string.
    fn group_digits(&self, integer: &str) -> String {
        if self.primary_group == 0 || integer.len() <= self.primary_group {
            return integer.to_string();
        }

        let (mut rest, last) = integer.split_at(integer.len() - self.primary_group);
        let mut groups = vec![last];
        let secondary = self.secondary_group.max(1);

        while rest.len() > secondary {
            let (head, group) = rest.split_at(rest.len() - secondary);
            groups.push(group);
            rest = head;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }

        groups.reverse();
        let mut buf = [0; 4];
        let separator: &str = self.grouping_separator.encode_utf8(&mut buf);
        groups.join(separator)
    }

    /// Renders `amount` in this locale's native currency style.
    ///
    /// ## Example
    /// ```text
    /// en_US  "¤#,##0.00"     1 → "$1.00"
    /// de_DE  "#,##0.00 ¤"    1 → "1,00 €"
    /// pt_BR  "¤ #,##0.00"    1 → "R$ 1,00"
    /// ```
    ///
    /// `None` when the locale has no currency pattern. A pattern with no
    /// number placeholder renders without any digits.
    pub fn render_native_currency(&self, amount: Decimal) -> Option<String> {
        let pattern = self.currency_pattern?;
        let positive = pattern.split(';').next().unwrap_or_default();

        let is_number_char = |c: char| matches!(c, '#' | '0' | ',' | '.');
        let Some(start) = positive.find(|c| matches!(c, '#' | '0')) else {
            return Some(positive.replace('¤', self.currency_symbol));
        };
        let end = positive
            .rfind(is_number_char)
            .map_or(positive.len(), |i| i + 1);

        let number_pattern = &positive[start..end];
        let fraction_digits = number_pattern
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.chars().filter(|c| *c == '0').count());
        let fraction_digits = u32::try_from(fraction_digits).unwrap_or(0);

        let number = self.render_decimal(amount, fraction_digits, fraction_digits)?;

        Some(format!(
            "{}{}{}",
            positive[..start].replace('¤', self.currency_symbol),
            number,
            positive[end..].replace('¤', self.currency_symbol),
        ))
    }
}

// =============================================================================
// Locale Data
// =============================================================================

static ROOT: NumberConventions = NumberConventions {
    decimal_separator: '.',
    grouping_separator: ',',
    primary_group: 3,
    secondary_group: 3,
    currency_pattern: None,
    currency_symbol: "¤",
};

/// Region used when a tag carries only a language.
const LANGUAGE_DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("da", "DK"),
    ("de", "DE"),
    ("en", "US"),
    ("es", "ES"),
    ("fr", "FR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nb", "NO"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "BR"),
    ("ru", "RU"),
    ("sv", "SE"),
    ("th", "TH"),
    ("tr", "TR"),
    ("vi", "VN"),
    ("zh", "CN"),
];

#[rustfmt::skip]
static LOCALE_TABLE: &[(&str, &str, NumberConventions)] = &[
    ("da", "DK", NumberConventions::new(',', '.', "#,##0.00\u{a0}¤", "kr.")),
    ("de", "AT", NumberConventions::new(',', NBSP, "¤\u{a0}#,##0.00", "€")),
    ("de", "CH", NumberConventions::new('.', APOSTROPHE, "¤\u{a0}#,##0.00;¤-#,##0.00", "CHF")),
    ("de", "DE", NumberConventions::new(',', '.', "#,##0.00\u{a0}¤", "€")),
    ("en", "AU", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("en", "CA", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("en", "GB", NumberConventions::new('.', ',', "¤#,##0.00", "£")),
    ("en", "IN", NumberConventions::lakh("₹")),
    ("en", "US", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("es", "419", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("es", "AR", NumberConventions::new(',', '.', "¤\u{a0}#,##0.00", "$")),
    ("es", "ES", NumberConventions::new(',', '.', "#,##0.00\u{a0}¤", "€")),
    ("es", "MX", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("es", "US", NumberConventions::new('.', ',', "¤#,##0.00", "$")),
    ("fr", "CA", NumberConventions::new(',', NBSP, "#,##0.00\u{a0}¤", "$")),
    ("fr", "CH", NumberConventions::new(',', NNBSP, "#,##0.00\u{a0}¤", "CHF")),
    ("fr", "FR", NumberConventions::new(',', NNBSP, "#,##0.00\u{a0}¤", "€")),
    ("he", "IL", NumberConventions::new('.', ',', "#,##0.00\u{a0}¤", "₪")),
    ("hi", "IN", NumberConventions::lakh("₹")),
    ("it", "IT", NumberConventions::new(',', '.', "#,##0.00\u{a0}¤", "€")),
    ("ja", "JP", NumberConventions::new('.', ',', "¤#,##0", "￥")),
    ("ko", "KR", NumberConventions::new('.', ',', "¤#,##0", "₩")),
    ("nb", "NO", NumberConventions::new(',', NBSP, "¤\u{a0}#,##0.00", "kr")),
    ("nl", "NL", NumberConventions::new(',', '.', "¤\u{a0}#,##0.00;¤\u{a0}-#,##0.00", "€")),
    ("pl", "PL", NumberConventions::new(',', NBSP, "#,##0.00\u{a0}¤", "zł")),
    ("pt", "BR", NumberConventions::new(',', '.', "¤\u{a0}#,##0.00", "R$")),
    ("pt", "PT", NumberConventions::new(',', NBSP, "#,##0.00\u{a0}¤", "€")),
    ("ru", "RU", NumberConventions::new(',', NBSP, "#,##0.00\u{a0}¤", "₽")),
    ("sv", "SE", NumberConventions::new(',', NBSP, "#,##0.00\u{a0}¤", "kr")),
    ("th", "TH", NumberConventions::new('.', ',', "¤#,##0.00", "฿")),
    ("tr", "TR", NumberConventions::new(',', '.', "¤#,##0.00", "₺")),
    ("vi", "VN", NumberConventions::new(',', '.', "#,##0\u{a0}¤", "₫")),
    ("zh", "CN", NumberConventions::new('.', ',', "¤#,##0.00", "¥")),
];

// =============================================================================
// Unit Tests
// =============================================================================
