//! # Settings Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Settings Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   File Access   │  │    Format       │  │     Content             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  Parse          │  │  InvalidLanguage        │ │
//! │  │                 │  │  Serialize      │  │  InvalidConfig          │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    // =========================================================================
    // File Access
    // =========================================================================
    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Format
    // =========================================================================
    #[error("Settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    // =========================================================================
    // Content
    // =========================================================================
    /// Language is neither "system" nor a parseable locale tag.
    #[error("Invalid language '{value}': {source}")]
    InvalidLanguage {
        value: String,
        #[source]
        source: checkout_core::LocaleError,
    },

    #[error("Invalid settings: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SettingsError::InvalidConfig("no path".into());
        assert_eq!(err.to_string(), "Invalid settings: no path");

        let source = checkout_core::LocaleTag::parse("x").unwrap_err();
        let err = SettingsError::InvalidLanguage {
            value: "x".into(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid language 'x': "));
    }

    #[test]
    fn test_toml_error_converts() {
        let parse_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: SettingsError = parse_err.into();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
