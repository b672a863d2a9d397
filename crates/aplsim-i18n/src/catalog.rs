//! Per-locale message catalogs, validated against the schema.
//!
//! # Invariants
//!
//! 1. **Schema conformance**: a catalog that constructs successfully holds a
//!    value for every [`MessageKey`] and nothing else. Divergence is a
//!    build-time error, never a lookup-time surprise.
//!
//! 2. **Totality**: `get()` returns a string for every schema key. No
//!    `Option`, no empty-string placeholder.
//!
//! 3. **Write-once**: catalogs are immutable after construction and shared
//!    freely (`Send + Sync`).
//!
//! 4. **Interpolation is single-pass**: `{name}` tokens are replaced once;
//!    replacement values are never re-scanned, and tokens without a matching
//!    argument are left as-is.

use std::fmt;

use crate::key::MessageKey;
use crate::locale::Locale;

/// Errors from catalog construction and message resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A catalog's key set diverges from the message schema. Both lists are
    /// sorted; a duplicated entry is reported under `extra`.
    SchemaMismatch {
        /// Locale of the offending catalog.
        locale: Locale,
        /// Schema keys the catalog did not supply.
        missing: Vec<String>,
        /// Supplied keys that are not in the schema (or were duplicated).
        extra: Vec<String>,
    },
    /// The resolver was used before `initialize`.
    NotInitialized,
    /// A locale with no registered catalog was requested.
    UnsupportedLocale(Locale),
    /// A lookup key outside the message schema. Typos in UI code surface
    /// here instead of rendering as blank text.
    UnknownKey(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaMismatch {
                locale,
                missing,
                extra,
            } => write!(
                f,
                "catalog for '{locale}' diverges from the message schema \
                 (missing: [{}], extra: [{}])",
                missing.join(", "),
                extra.join(", ")
            ),
            Self::NotInitialized => write!(f, "locale resolver used before initialize"),
            Self::UnsupportedLocale(locale) => {
                write!(f, "no catalog registered for locale '{locale}'")
            }
            Self::UnknownKey(key) => write!(f, "message key '{key}' is not in the schema"),
        }
    }
}

impl std::error::Error for I18nError {}

/// One locale's complete key→string translation table.
///
/// # Example
///
/// ```
/// use aplsim_i18n::{Locale, MessageCatalog, MessageKey};
///
/// let catalog = MessageCatalog::build(
///     Locale::EnUs,
///     MessageKey::ALL.map(|k| (k.name(), k.name())),
/// )
/// .unwrap();
/// assert_eq!(catalog.get(MessageKey::Simulator), "aside.name.simulator");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    // Indexed by MessageKey discriminant; complete by construction.
    values: [String; MessageKey::COUNT],
}

impl MessageCatalog {
    /// Build a catalog from a flat `(key, value)` entry list, validating it
    /// against the message schema.
    ///
    /// Fails with [`I18nError::SchemaMismatch`] when any schema key is
    /// absent, any entry names a key outside the schema, or a key appears
    /// more than once.
    pub fn build<'a>(
        locale: Locale,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<MessageCatalog, I18nError> {
        let mut values: [Option<String>; MessageKey::COUNT] = Default::default();
        let mut extra: Vec<String> = Vec::new();

        for (name, value) in entries {
            match MessageKey::parse(name) {
                Some(key) => {
                    let slot = &mut values[key as usize];
                    if slot.is_some() {
                        extra.push(name.to_string());
                    } else {
                        *slot = Some(value.to_string());
                    }
                }
                None => extra.push(name.to_string()),
            }
        }

        let mut missing: Vec<String> = MessageKey::ALL
            .into_iter()
            .filter(|k| values[*k as usize].is_none())
            .map(|k| k.name().to_string())
            .collect();

        if missing.is_empty() && extra.is_empty() {
            // Every slot is filled exactly once.
            let values = values.map(|v| v.unwrap_or_default());
            Ok(MessageCatalog { locale, values })
        } else {
            missing.sort_unstable();
            extra.sort_unstable();
            extra.dedup();
            Err(I18nError::SchemaMismatch {
                locale,
                missing,
                extra,
            })
        }
    }

    /// Build a catalog from an exhaustive key→value function.
    ///
    /// An exhaustive `match` on [`MessageKey`] cannot omit a key, so this
    /// constructor is infallible. The shipped catalogs use it to get the
    /// completeness check at compile time.
    pub fn from_fn<S: Into<String>>(
        locale: Locale,
        mut values: impl FnMut(MessageKey) -> S,
    ) -> MessageCatalog {
        MessageCatalog {
            locale,
            values: MessageKey::ALL.map(|k| values(k).into()),
        }
    }

    /// The locale this catalog translates for.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a message. Total over the schema: every key has a value.
    #[must_use]
    pub fn get(&self, key: MessageKey) -> &str {
        &self.values[key as usize]
    }
}

/// Single-pass `{name}` interpolation. Unmatched tokens are left as-is, and
/// replacement values are never re-scanned.
pub(crate) fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }
        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }
        match args.iter().find(|&&(name, _)| closed && name == token) {
            Some(&(_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(&token);
                if closed {
                    out.push('}');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_entries() -> Vec<(&'static str, &'static str)> {
        MessageKey::ALL.map(|k| (k.name(), k.name())).to_vec()
    }

    #[test]
    fn complete_entry_list_builds() {
        let catalog = MessageCatalog::build(Locale::EnUs, complete_entries()).unwrap();
        for key in MessageKey::ALL {
            assert_eq!(catalog.get(key), key.name());
        }
    }

    #[test]
    fn missing_key_is_schema_mismatch() {
        let entries: Vec<_> = complete_entries()
            .into_iter()
            .filter(|(name, _)| *name != "aside.name.simulator")
            .collect();
        let err = MessageCatalog::build(Locale::EnUs, entries).unwrap_err();
        assert_eq!(
            err,
            I18nError::SchemaMismatch {
                locale: Locale::EnUs,
                missing: vec!["aside.name.simulator".to_string()],
                extra: vec![],
            }
        );
    }

    #[test]
    fn extra_key_is_schema_mismatch() {
        let mut entries = complete_entries();
        entries.push(("aside.name.bogus", "Bogus"));
        let err = MessageCatalog::build(Locale::ZhCn, entries).unwrap_err();
        assert_eq!(
            err,
            I18nError::SchemaMismatch {
                locale: Locale::ZhCn,
                missing: vec![],
                extra: vec!["aside.name.bogus".to_string()],
            }
        );
    }

    #[test]
    fn duplicate_key_reported_as_extra() {
        let mut entries = complete_entries();
        entries.push(("aside.name.simulator", "Again"));
        let err = MessageCatalog::build(Locale::EnUs, entries).unwrap_err();
        match err {
            I18nError::SchemaMismatch { missing, extra, .. } => {
                assert!(missing.is_empty());
                assert_eq!(extra, vec!["aside.name.simulator".to_string()]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_lists_are_sorted() {
        let err = MessageCatalog::build(
            Locale::EnUs,
            vec![("zz.unknown", "x"), ("aa.unknown", "y")],
        )
        .unwrap_err();
        match err {
            I18nError::SchemaMismatch { missing, extra, .. } => {
                let mut sorted_missing = missing.clone();
                sorted_missing.sort_unstable();
                assert_eq!(missing, sorted_missing);
                assert_eq!(extra, vec!["aa.unknown".to_string(), "zz.unknown".to_string()]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn from_fn_is_total() {
        let catalog = MessageCatalog::from_fn(Locale::EnUs, |k| format!("<{}>", k.name()));
        for key in MessageKey::ALL {
            assert_eq!(catalog.get(key), format!("<{}>", key.name()));
        }
    }

    #[test]
    fn interpolation_edge_cases() {
        // Unclosed brace
        assert_eq!(interpolate("Hello {world", &[]), "Hello {world");
        // Empty braces
        assert_eq!(interpolate("Hello {}", &[]), "Hello {}");
        // No braces
        assert_eq!(interpolate("Hello World", &[]), "Hello World");
        // Multiple occurrences
        assert_eq!(interpolate("{x} and {x}", &[("x", "A")]), "A and A");
        // Replacement values are not re-scanned
        assert_eq!(interpolate("{x}", &[("x", "{x}")]), "{x}");
    }

    #[test]
    fn error_display_names_the_divergence() {
        let err = I18nError::SchemaMismatch {
            locale: Locale::EnUs,
            missing: vec!["aside.name.simulator".to_string()],
            extra: vec![],
        };
        let text = err.to_string();
        assert!(text.contains("en-US"));
        assert!(text.contains("aside.name.simulator"));
    }
}
