//! Locales
//!
//! A locale is an opaque identifier (`en`, `fr`, ...) sent to the content API as
//! the `$locale` variable of every content-bearing query. The set of supported
//! locales is fixed at startup from configuration.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Ordered set of supported locales plus the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    /// Build a locale set. Duplicates are dropped, first occurrence wins.
    pub fn new(locales: Vec<Locale>, default: Locale) -> Result<Self, ContentError> {
        let mut unique: Vec<Locale> = Vec::with_capacity(locales.len());
        for locale in locales {
            if locale.as_str().trim().is_empty() {
                return Err(ContentError::ConfigError(
                    "Locale codes cannot be empty".to_string(),
                ));
            }
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }

        if unique.is_empty() {
            return Err(ContentError::ConfigError(
                "At least one supported locale is required".to_string(),
            ));
        }
        if !unique.contains(&default) {
            return Err(ContentError::ConfigError(format!(
                "Default locale '{}' is not in the supported set",
                default
            )));
        }

        Ok(Self {
            locales: unique,
            default,
        })
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }

    /// Reject a locale that is not configured, before any query is built.
    pub fn ensure_supported(&self, locale: &Locale) -> Result<(), ContentError> {
        if self.contains(locale) {
            Ok(())
        } else {
            Err(ContentError::UnsupportedLocale {
                locale: locale.to_string(),
                supported: self.describe(),
            })
        }
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    fn describe(&self) -> String {
        self.locales
            .iter()
            .map(Locale::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
