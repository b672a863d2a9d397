#![forbid(unsafe_code)]

//! Locale catalogs and message resolution for APLSim.
//!
//! # Role in APLSim
//! `aplsim-i18n` is the one layer between the UI and its translated text.
//! Presentation components call `t(key)` and never touch catalogs directly,
//! so the editor and simulator views stay language-agnostic.
//!
//! # This crate provides
//! - [`Locale`], the closed set of supported language tags.
//! - [`MessageKey`], the message schema: every valid lookup key, as a type.
//! - [`MessageCatalog`], one locale's complete translation table, validated
//!   against the schema at construction.
//! - [`LocaleResolver`], the `t()` entry point with fallback-locale
//!   resolution, plus [`SharedResolver`] for multi-threaded hosts.
//! - The shipped catalogs ([`builtin_catalogs`]) and the application's boot
//!   configuration ([`default_resolver`]).
//!
//! # How it fits in the system
//! The application initializes one resolver at startup and hands it to the
//! view layer; a locale switch in the settings UI is a single
//! `set_active_locale` call and takes effect on the next render. Catalog
//! mistakes (a missing or extra translation) fail at registration, never as
//! blank text in a running session.

/// Shipped catalogs and the default boot configuration.
pub mod builtin;
/// Per-locale message tables with schema validation.
pub mod catalog;
/// The message schema as a typed key set.
pub mod key;
/// Supported locale identifiers.
pub mod locale;
/// The locale resolver consumed by UI code.
pub mod resolver;
/// Thread-safe resolver with snapshot reads.
pub mod shared;

pub use builtin::{builtin_catalogs, default_resolver, en_us, zh_cn};
pub use catalog::{I18nError, MessageCatalog};
pub use key::MessageKey;
pub use locale::Locale;
pub use resolver::LocaleResolver;
pub use shared::SharedResolver;
