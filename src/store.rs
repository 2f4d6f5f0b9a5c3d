//! Store configuration: locales and theme/locale pairs driving asset builds.
//!
//! The original store configuration lives in the Magento database; here the
//! values are supplied on the command line and exposed behind the same
//! collaborator interface the manager consumes.

use crate::theme::{LocaleCode, ThemeCode};

/// A storefront theme paired with a locale, driving one CSS deployment.
/// A pair with no theme falls back to the configured default at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLocalePair {
    pub theme: Option<ThemeCode>,
    pub locale: LocaleCode,
}

impl ThemeLocalePair {
    /// Parse a pair from "Vendor/theme:locale", ":locale" or "locale" format
    pub fn parse(s: &str) -> Result<Self, String> {
        let (theme_part, locale_part) = match s.rsplit_once(':') {
            Some((theme, locale)) => (theme, locale),
            None => ("", s),
        };

        let theme = if theme_part.is_empty() {
            None
        } else {
            Some(
                ThemeCode::parse(theme_part)
                    .ok_or_else(|| format!("invalid theme '{}': expected Vendor/name", theme_part))?,
            )
        };

        let locale = LocaleCode::validated(locale_part)?;

        Ok(Self { theme, locale })
    }
}

/// Configured locales and theme/locale pairs
pub trait StoreConfig {
    /// All locales configured for the store views
    fn locales(&self) -> Vec<LocaleCode>;

    /// One theme/locale pair per store view variant
    fn theme_locale_pairs(&self) -> Vec<ThemeLocalePair>;
}

/// Store view configuration supplied via the CLI
#[derive(Debug, Clone)]
pub struct StoreView {
    locales: Vec<LocaleCode>,
    pairs: Vec<ThemeLocalePair>,
}

impl StoreView {
    pub fn new(locales: Vec<LocaleCode>, pairs: Vec<ThemeLocalePair>) -> Self {
        Self { locales, pairs }
    }
}

impl StoreConfig for StoreView {
    fn locales(&self) -> Vec<LocaleCode> {
        self.locales.clone()
    }

    fn theme_locale_pairs(&self) -> Vec<ThemeLocalePair> {
        self.pairs.clone()
    }
}
