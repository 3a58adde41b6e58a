//! Display locale selection.

use std::fmt;
use std::str::FromStr;

/// Locale used for month names and every user-facing string on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// chrono locale backing localized month names.
    pub(crate) fn chrono_locale(self) -> chrono::Locale {
        match self {
            Self::Es => chrono::Locale::es_ES,
            Self::En => chrono::Locale::en_US,
        }
    }

    /// `strftime` pattern for a "Month Year" label.
    pub(crate) fn month_year_pattern(self) -> &'static str {
        match self {
            Self::Es => "%B de %Y",
            Self::En => "%B %Y",
        }
    }

    /// Value for the document's `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported locale '{0}', expected 'es' or 'en'")]
pub struct UnsupportedLocale(String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" | "es_es" => Ok(Self::Es),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_lang())
    }
}
