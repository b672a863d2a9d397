//! Thread-safe resolver for hosts that render off the main thread.
//!
//! Locale state is read-dominated: every widget reads it on every render,
//! while writes happen only when the user flips a preference. A plain lock
//! would put contention on the hot read path, so reads load an immutable
//! snapshot via `arc-swap` (one load per call, no torn reads between a
//! locale switch and an in-flight lookup) and the rare writes serialize
//! behind a `Mutex` before swapping a new snapshot in.
//!
//! Lookups return owned `String`s because the snapshot a borrowed value
//! would point into can be swapped out at any moment.

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwapOption;
use tracing::{debug, warn};

use crate::catalog::{I18nError, MessageCatalog, interpolate};
use crate::key::MessageKey;
use crate::locale::Locale;
use crate::resolver::ResolverState;

/// A [`LocaleResolver`](crate::LocaleResolver) with interior mutability:
/// `t()` from any thread, writes serialized.
#[derive(Debug, Default)]
pub struct SharedResolver {
    state: ArcSwapOption<ResolverState>,
    // Serializes initialize/set_active_locale so concurrent writers cannot
    // lose each other's updates between load and store.
    write: Mutex<()>,
}

impl SharedResolver {
    /// Create an uninitialized shared resolver.
    #[must_use]
    pub fn new() -> SharedResolver {
        SharedResolver {
            state: ArcSwapOption::const_empty(),
            write: Mutex::new(()),
        }
    }

    /// See [`LocaleResolver::initialize`](crate::LocaleResolver::initialize).
    pub fn initialize(
        &self,
        catalogs: Vec<MessageCatalog>,
        active: Locale,
        fallback: Locale,
    ) -> Result<(), I18nError> {
        let next = ResolverState::new(catalogs, active, fallback)?;
        let _guard = self.write.lock().unwrap_or_else(|poisoned| {
            // A writer panicking leaves no partial state behind (writes are
            // a single atomic swap), so the lock is still usable.
            poisoned.into_inner()
        });
        self.state.store(Some(Arc::new(next)));
        Ok(())
    }

    fn snapshot(&self) -> Result<Arc<ResolverState>, I18nError> {
        self.state.load_full().ok_or(I18nError::NotInitialized)
    }

    /// Look up a message by its dotted string key.
    pub fn t(&self, key: &str) -> Result<String, I18nError> {
        let key = ResolverState::parse_key(key)?;
        Ok(self.snapshot()?.message(key)?.to_string())
    }

    /// Look up a message by typed key.
    pub fn message(&self, key: MessageKey) -> Result<String, I18nError> {
        Ok(self.snapshot()?.message(key)?.to_string())
    }

    /// Look up a message and substitute `{name}` placeholders from `args`.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Result<String, I18nError> {
        Ok(interpolate(&self.t(key)?, args))
    }

    /// Switch the active locale; the swap is atomic with respect to
    /// concurrent `t()` calls.
    pub fn set_active_locale(&self, locale: Locale) -> Result<(), I18nError> {
        let _guard = self.write.lock().unwrap_or_else(|p| p.into_inner());
        let current = self.snapshot()?;
        if !current.catalogs.contains_key(&locale) {
            warn!(%locale, "rejecting switch to unsupported locale");
            return Err(I18nError::UnsupportedLocale(locale));
        }
        let mut next = ResolverState::clone(&current);
        debug!(from = %next.active, to = %locale, "active locale changed");
        next.active = locale;
        self.state.store(Some(Arc::new(next)));
        Ok(())
    }

    /// The selected locale, or `None` before `initialize`.
    #[must_use]
    pub fn active_locale(&self) -> Option<Locale> {
        self.state.load().as_ref().map(|s| s.active)
    }

    /// The fallback locale, or `None` before `initialize`.
    #[must_use]
    pub fn fallback_locale(&self) -> Option<Locale> {
        self.state.load().as_ref().map(|s| s.fallback)
    }

    /// Whether `initialize` has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.load().is_some()
    }
}
