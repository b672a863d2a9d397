//! Supported locale identifiers.
//!
//! The set of locales is closed: APLSim ships translations for exactly the
//! tags listed here, and every other layer (catalog validation, resolver
//! state, persisted preferences) keys off this enum rather than free-form
//! strings. Adding a language means adding a variant, which forces the
//! catalog layer to supply a complete translation table for it.

use std::fmt;

/// A supported language/region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// American English (`en-US`).
    #[cfg_attr(feature = "serde", serde(rename = "en-US"))]
    EnUs,
    /// Simplified Chinese (`zh-CN`).
    #[cfg_attr(feature = "serde", serde(rename = "zh-CN"))]
    ZhCn,
}

impl Locale {
    /// Every supported locale, in a fixed order.
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::ZhCn];

    /// The BCP 47 language tag (e.g. `"en-US"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// The language's own name for itself, for locale pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::ZhCn => "简体中文",
        }
    }

    /// Parse a language tag. Returns `None` for tags outside the
    /// supported set.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.tag() == tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
