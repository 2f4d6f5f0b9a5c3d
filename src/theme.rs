//! Theme and locale identifier types.
//!
//! Provides type-safe wrappers for theme codes and locale codes with
//! validation and efficient string interning using `Arc<str>`. These only
//! exist to build command-line arguments for the delegated `bin/magento`
//! commands.

use std::fmt;
use std::sync::Arc;

/// Theme code in "Vendor/name" format (e.g., "Magento/blank").
/// Newtype wrapper for type safety and validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeCode(Arc<str>);

impl ThemeCode {
    /// Create a new ThemeCode from vendor and name
    pub fn new(vendor: &str, name: &str) -> Self {
        Self(Arc::from(format!("{}/{}", vendor, name)))
    }

    /// Parse a ThemeCode from "Vendor/name" format
    /// Returns None if format is invalid
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains('/') && s.split('/').count() == 2 {
            Some(Self(Arc::from(s)))
        } else {
            None
        }
    }

    /// Get the inner string reference
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the vendor part (before the slash)
    #[inline]
    pub fn vendor(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }

    /// Get the name part (after the slash)
    #[inline]
    pub fn name(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or("")
    }
}

impl fmt::Display for ThemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThemeCode {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

/// Locale code (e.g., "en_US", "nl_NL")
/// Newtype wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode(Arc<str>);

impl LocaleCode {
    /// Create a new LocaleCode without validation
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Create a validated LocaleCode, returning error for invalid format
    /// Format must be xx_YY (e.g., en_US, nl_NL, de_DE)
    pub fn validated(s: &str) -> Result<Self, String> {
        if Self::validate_format(s) {
            Ok(Self(Arc::from(s)))
        } else {
            Err(format!(
                "invalid locale format '{}': expected xx_YY (e.g., en_US)",
                s
            ))
        }
    }

    /// Validate locale format: xx_YY where xx is lowercase and YY is uppercase
    #[inline]
    fn validate_format(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 5
            && bytes[2] == b'_'
            && bytes[0].is_ascii_lowercase()
            && bytes[1].is_ascii_lowercase()
            && bytes[3].is_ascii_uppercase()
            && bytes[4].is_ascii_uppercase()
    }

    /// Get the inner string reference
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a valid locale format (xx_YY)
    #[inline]
    pub fn is_valid_format(&self) -> bool {
        Self::validate_format(&self.0)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LocaleCode {
    fn from(s: String) -> Self {
        Self(Arc::from(s.as_str()))
    }
}
