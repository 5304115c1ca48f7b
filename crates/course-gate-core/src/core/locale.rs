// crates/course-gate-core/src/core/locale.rs
// ============================================================================
// Module: Course Gate Date Localization
// Description: Supported locales and short-form date rendering.
// Purpose: Render start dates for display without a runtime locale lookup.
// Dependencies: crate::interfaces, serde, time
// ============================================================================

//! ## Overview
//! Start dates shown to viewers are localized before they reach a redirect
//! query string or countdown message. The catalog here is compiled in:
//! every supported locale ships month names with the binary, so rendering
//! is infallible and deterministic. Catalan month names are deliberately
//! non-ASCII, which keeps the encoding path honest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde::de;
use time::Date;

use crate::interfaces::DateLocalizer;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Locales with a compiled-in date catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Catalan.
    Ca,
}

/// Locales accepted by [`Locale::parse`].
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// Abbreviated English month names, January first.
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated Catalan month names, January first.
const MONTHS_CA: [&str; 12] = [
    "gen.", "febr.", "març", "abr.", "maig", "juny", "jul.", "ag.", "set.", "oct.", "nov.", "des.",
];

impl Locale {
    /// Returns the canonical language tag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Parses a language tag, tolerating case and region subtags.
    ///
    /// `"en"`, `"EN"`, `"en-US"`, and `"en_US"` all resolve to
    /// [`Locale::En`]. Unsupported languages return `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or(normalized.as_str());
        match primary {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }

    /// Renders a date in this locale's short form.
    ///
    /// English renders `Jan 01, 2030`; Catalan renders `01 gen. 2030`.
    #[must_use]
    pub fn short_date(self, date: Date) -> String {
        let month_index = usize::from(u8::from(date.month()).saturating_sub(1));
        match self {
            Self::En => {
                let month = MONTHS_EN.get(month_index).copied().unwrap_or("Jan");
                format!("{month} {:02}, {}", date.day(), date.year())
            }
            Self::Ca => {
                let month = MONTHS_CA.get(month_index).copied().unwrap_or("gen.");
                format!("{:02} {month} {}", date.day(), date.year())
            }
        }
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Self::parse(tag.as_str())
            .ok_or_else(|| de::Error::custom(format!("unsupported locale: {tag}")))
    }
}

// ============================================================================
// SECTION: Catalog Localizer
// ============================================================================

/// [`DateLocalizer`] backed by the compiled-in locale catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogDateLocalizer {
    /// Locale used for rendering.
    locale: Locale,
}

impl CatalogDateLocalizer {
    /// Creates a localizer for the given locale.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
        }
    }

    /// Returns the locale this localizer renders in.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

impl DateLocalizer for CatalogDateLocalizer {
    fn short_date(&self, date: Date) -> String {
        self.locale.short_date(date)
    }
}
