//! # Language Preference
//!
//! Turns the user's language setting into the explicit [`LocaleTag`] that
//! every formatting call in `checkout-core` takes.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  settings.toml: language = "system"       language = "pt_BR"           │
//! │                       │                          │                      │
//! │                       ▼                          ▼                      │
//! │        LanguagePreference::System      LanguagePreference::Tag(pt_BR)  │
//! │                       │                          │                      │
//! │                       ▼                          │                      │
//! │        system_locale()                           │                      │
//! │        LC_ALL → LC_NUMERIC → LANG                │                      │
//! │        "C" / unset / garbage → und (root)        │                      │
//! │                       │                          │                      │
//! │                       └───────────┬──────────────┘                      │
//! │                                   ▼                                     │
//! │                           resolved LocaleTag                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use checkout_core::LocaleTag;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SettingsError;

/// POSIX variables consulted for the system locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

// =============================================================================
// Language Preference
// =============================================================================

/// The display language the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguagePreference {
    /// Follow the operating system.
    #[default]
    System,
    /// A fixed locale.
    Tag(LocaleTag),
}

impl LanguagePreference {
    /// The locale to format with.
    ///
    /// `system_locale` is only used for [`LanguagePreference::System`]; pass
    /// [`system_locale()`] in the app and a fixed tag in tests.
    pub fn resolve(&self, system_locale: &LocaleTag) -> LocaleTag {
        match self {
            LanguagePreference::System => system_locale.clone(),
            LanguagePreference::Tag(tag) => tag.clone(),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, LanguagePreference::System)
    }
}

impl fmt::Display for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguagePreference::System => write!(f, "system"),
            LanguagePreference::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for LanguagePreference {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("system") {
            return Ok(LanguagePreference::System);
        }

        LocaleTag::parse(value)
            .map(LanguagePreference::Tag)
            .map_err(|source| SettingsError::InvalidLanguage {
                value: value.to_string(),
                source,
            })
    }
}

impl TryFrom<String> for LanguagePreference {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguagePreference> for String {
    fn from(preference: LanguagePreference) -> Self {
        preference.to_string()
    }
}

// =============================================================================
// System Locale
// =============================================================================

/// The operating system's locale from the POSIX environment.
pub fn system_locale() -> LocaleTag {
    locale_from_vars(|name| std::env::var(name).ok())
}

/// First non-empty variable of `LC_ALL`, `LC_NUMERIC`, `LANG`, parsed.
///
/// Falls back to [`LocaleTag::root`] for `C`, `POSIX`, unset and
/// unparseable values.
fn locale_from_vars(lookup: impl Fn(&str) -> Option<String>) -> LocaleTag {
    let Some((name, value)) = LOCALE_VARS.iter().find_map(|name| {
        lookup(name)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (*name, value))
    }) else {
        debug!("No locale variables set, using root locale");
        return LocaleTag::root();
    };

    match LocaleTag::parse(&value) {
        Ok(tag) => {
            debug!(var = name, %tag, "Resolved system locale");
            tag
        }
        Err(e) => {
            debug!(var = name, value = %value, error = %e, "Unusable system locale, using root");
            LocaleTag::root()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_preference_parsing() {
        assert_eq!("system".parse::<LanguagePreference>().unwrap(), LanguagePreference::System);
        assert_eq!("System".parse::<LanguagePreference>().unwrap(), LanguagePreference::System);
        assert_eq!("".parse::<LanguagePreference>().unwrap(), LanguagePreference::System);
        assert_eq!(
            "pt-br".parse::<LanguagePreference>().unwrap(),
            LanguagePreference::Tag(LocaleTag::parse("pt_BR").unwrap())
        );
        assert!(matches!(
            "klingon".parse::<LanguagePreference>(),
            Err(SettingsError::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn test_preference_display() {
        assert_eq!(LanguagePreference::System.to_string(), "system");
        let es = LanguagePreference::Tag(LocaleTag::parse("es").unwrap());
        assert_eq!(es.to_string(), "es");
    }

    #[test]
    fn test_resolve() {
        let system = LocaleTag::parse("de_DE").unwrap();
        assert_eq!(LanguagePreference::System.resolve(&system), system);

        let fr = LocaleTag::parse("fr_FR").unwrap();
        assert_eq!(LanguagePreference::Tag(fr.clone()).resolve(&system), fr);
    }

    #[test]
    fn test_locale_from_vars_priority() {
        let tag = locale_from_vars(vars(&[("LANG", "en_US.UTF-8"), ("LC_NUMERIC", "de_DE.UTF-8")]));
        assert_eq!(tag.to_string(), "de_DE");

        let tag = locale_from_vars(vars(&[("LC_ALL", "fr_FR"), ("LANG", "en_US")]));
        assert_eq!(tag.to_string(), "fr_FR");
    }

    #[test]
    fn test_locale_from_vars_skips_empty() {
        let tag = locale_from_vars(vars(&[("LC_ALL", ""), ("LANG", "es_ES.UTF-8")]));
        assert_eq!(tag.to_string(), "es_ES");
    }

    #[test]
    fn test_locale_from_vars_falls_back_to_root() {
        assert_eq!(locale_from_vars(vars(&[])), LocaleTag::root());
        assert_eq!(locale_from_vars(vars(&[("LANG", "C")])), LocaleTag::root());
        assert_eq!(locale_from_vars(vars(&[("LANG", "C.UTF-8")])), LocaleTag::root());
        assert_eq!(locale_from_vars(vars(&[("LC_ALL", "POSIX")])), LocaleTag::root());
    }
}
