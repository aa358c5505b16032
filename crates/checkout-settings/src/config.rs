//! # Settings
//!
//! User settings for display: language and the symbol given to new lists.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_LANGUAGE=es_ES                                            │
//! │     CHECKOUT_CURRENCY_SYMBOL=€                                         │
//! │                                                                         │
//! │  2. TOML Settings File                                                 │
//! │     ~/.config/checkouthero/settings.toml (Linux)                       │
//! │     ~/Library/Application Support/com.checkouthero.app/settings.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     language = "system", default_currency_symbol = "$"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # settings.toml
//! [display]
//! language = "system"          # "system" or a locale tag: "es", "pt_BR"
//! default_currency_symbol = "$"
//! ```

use std::path::{Path, PathBuf};

use checkout_core::validation::validate_currency_symbol;
use checkout_core::{LocaleTag, DEFAULT_CURRENCY_SYMBOL};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SettingsError, SettingsResult};
use crate::language::{system_locale, LanguagePreference};

/// File name inside the platform config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

// =============================================================================
// Display Settings
// =============================================================================

/// How amounts are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// "system" or a fixed locale.
    #[serde(default)]
    pub language: LanguagePreference,

    /// Symbol assigned to newly created lists.
    #[serde(default = "default_currency_symbol")]
    pub default_currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: LanguagePreference::System,
            default_currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Complete settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file (explicit path, else the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SettingsResult<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading settings from file");
                settings = Self::read_file(&path)?;
            } else {
                debug!(?path, "Settings file not found, using defaults");
            }
        }

        settings.apply_env_overrides(|name| std::env::var(name).ok())?;
        settings.validate()?;

        Ok(settings)
    }

    /// Loads settings or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load settings: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn read_file(path: &Path) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes settings as pretty TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> SettingsResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SettingsError::InvalidConfig("No settings path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Settings saved");
        Ok(())
    }

    /// Checks values that serde alone cannot.
    pub fn validate(&self) -> SettingsResult<()> {
        validate_currency_symbol(&self.display.default_currency_symbol)
            .map_err(|e| SettingsError::InvalidConfig(e.to_string()))
    }

    /// Applies `CHECKOUT_*` overrides read through `lookup`.
    ///
    /// An unparseable `CHECKOUT_LANGUAGE` is an error, not ignored.
    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> SettingsResult<()> {
        if let Some(language) = lookup("CHECKOUT_LANGUAGE") {
            let preference: LanguagePreference = language.parse()?;
            debug!(language = %preference, "Overriding language from environment");
            self.display.language = preference;
        }

        if let Some(symbol) = lookup("CHECKOUT_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding default currency symbol from environment");
            self.display.default_currency_symbol = symbol.trim().to_string();
        }

        Ok(())
    }

    /// `settings.toml` in the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkouthero", "app")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The configured language resolved against `system_locale`.
    pub fn resolve_locale(&self, system_locale: &LocaleTag) -> LocaleTag {
        self.display.language.resolve(system_locale)
    }

    /// The configured language resolved against the OS environment.
    pub fn locale(&self) -> LocaleTag {
        self.resolve_locale(&system_locale())
    }

    pub fn default_currency_symbol(&self) -> &str {
        &self.display.default_currency_symbol
    }
}
