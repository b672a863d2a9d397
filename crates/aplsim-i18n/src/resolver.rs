//! Locale resolution: the `t()` lookup the UI layer consumes.
//!
//! The resolver is an explicit context object handed to whatever needs
//! translated text; there is no process-wide singleton, so tests and tools
//! can run independent resolvers side by side.
//!
//! # State machine
//!
//! Two states. *Uninitialized* (the `new()` value): every lookup and locale
//! switch fails with [`I18nError::NotInitialized`]. *Ready* (after
//! [`LocaleResolver::initialize`]): lookups answer from the active locale's
//! catalog, or from the fallback catalog when the active locale has no
//! registered catalog. `initialize` may be called again (last write wins)
//! and `set_active_locale` loops on *ready*; there is no terminal state.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `NotInitialized` | lookup/switch before `initialize` | surfaced immediately |
//! | `UnsupportedLocale` | fallback unregistered at `initialize`, or switch target unregistered | state unchanged |
//! | `UnknownKey` | string key outside the schema | surfaced, never blank text |

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{I18nError, MessageCatalog, interpolate};
use crate::key::MessageKey;
use crate::locale::Locale;

/// The *ready*-state snapshot: active/fallback locales plus the registered
/// catalogs. Immutable values behind an `Arc` so the shared resolver can
/// swap whole snapshots cheaply.
#[derive(Debug, Clone)]
pub(crate) struct ResolverState {
    pub(crate) active: Locale,
    pub(crate) fallback: Locale,
    pub(crate) catalogs: Arc<HashMap<Locale, MessageCatalog>>,
}

impl ResolverState {
    /// Validate and assemble a snapshot.
    ///
    /// The fallback locale must have a catalog. The active locale is
    /// accepted even without one: the resolver keeps the requested tag and
    /// answers every lookup from the fallback catalog until a supported
    /// locale is selected. Failing hard here would turn a stale persisted
    /// preference into a startup crash.
    pub(crate) fn new(
        catalogs: Vec<MessageCatalog>,
        active: Locale,
        fallback: Locale,
    ) -> Result<ResolverState, I18nError> {
        let catalogs: HashMap<Locale, MessageCatalog> = catalogs
            .into_iter()
            .map(|c| (c.locale(), c))
            .collect();
        if !catalogs.contains_key(&fallback) {
            return Err(I18nError::UnsupportedLocale(fallback));
        }
        if !catalogs.contains_key(&active) {
            warn!(
                active = %active,
                fallback = %fallback,
                "active locale has no catalog; lookups will use the fallback"
            );
        }
        debug!(
            active = %active,
            fallback = %fallback,
            locales = catalogs.len(),
            "locale resolver initialized"
        );
        Ok(ResolverState {
            active,
            fallback,
            catalogs: Arc::new(catalogs),
        })
    }

    /// The catalog lookups answer from: active if registered, else fallback.
    fn catalog(&self) -> Result<&MessageCatalog, I18nError> {
        self.catalogs
            .get(&self.active)
            .or_else(|| self.catalogs.get(&self.fallback))
            .ok_or(I18nError::UnsupportedLocale(self.fallback))
    }

    pub(crate) fn message(&self, key: MessageKey) -> Result<&str, I18nError> {
        Ok(self.catalog()?.get(key))
    }

    pub(crate) fn parse_key(key: &str) -> Result<MessageKey, I18nError> {
        MessageKey::parse(key).ok_or_else(|| {
            warn!(key, "lookup with a key outside the message schema");
            I18nError::UnknownKey(key.to_string())
        })
    }
}

/// Selects the active catalog and answers message lookups with fallback.
///
/// # Example
///
/// ```
/// use aplsim_i18n::{Locale, LocaleResolver, builtin_catalogs};
///
/// let mut resolver = LocaleResolver::new();
/// resolver
///     .initialize(builtin_catalogs(), Locale::EnUs, Locale::ZhCn)
///     .unwrap();
/// assert_eq!(resolver.t("aside.name.simulator").unwrap(), "Simulator");
///
/// resolver.set_active_locale(Locale::ZhCn).unwrap();
/// assert_eq!(resolver.t("aside.name.simulator").unwrap(), "模拟器");
/// ```
#[derive(Debug, Default)]
pub struct LocaleResolver {
    state: Option<ResolverState>,
}

impl LocaleResolver {
    /// Create an uninitialized resolver.
    #[must_use]
    pub fn new() -> LocaleResolver {
        LocaleResolver { state: None }
    }

    /// Register catalogs and select the active and fallback locales.
    ///
    /// `fallback` must have a catalog ([`I18nError::UnsupportedLocale`]
    /// otherwise, and the resolver stays in its previous state). `active`
    /// without a catalog is accepted; lookups then answer from the fallback
    /// catalog. Calling again replaces the previous registration.
    pub fn initialize(
        &mut self,
        catalogs: Vec<MessageCatalog>,
        active: Locale,
        fallback: Locale,
    ) -> Result<(), I18nError> {
        self.state = Some(ResolverState::new(catalogs, active, fallback)?);
        Ok(())
    }

    fn ready(&self) -> Result<&ResolverState, I18nError> {
        self.state.as_ref().ok_or(I18nError::NotInitialized)
    }

    /// Look up a message by its dotted string key.
    ///
    /// Keys outside the schema fail with [`I18nError::UnknownKey`]; typos in
    /// UI code surface during development instead of rendering blank.
    pub fn t(&self, key: &str) -> Result<&str, I18nError> {
        let state = self.ready()?;
        state.message(ResolverState::parse_key(key)?)
    }

    /// Look up a message by typed key. Cannot fail with `UnknownKey`.
    pub fn message(&self, key: MessageKey) -> Result<&str, I18nError> {
        self.ready()?.message(key)
    }

    /// Look up a message and substitute `{name}` placeholders from `args`.
    /// Placeholders without a matching argument are left as-is.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Result<String, I18nError> {
        Ok(interpolate(self.t(key)?, args))
    }

    /// Switch the active locale. The next lookup reflects the new locale.
    ///
    /// Fails with [`I18nError::UnsupportedLocale`] when `locale` has no
    /// registered catalog; the active locale is unchanged in that case.
    pub fn set_active_locale(&mut self, locale: Locale) -> Result<(), I18nError> {
        let state = self.state.as_mut().ok_or(I18nError::NotInitialized)?;
        if !state.catalogs.contains_key(&locale) {
            warn!(%locale, "rejecting switch to unsupported locale");
            return Err(I18nError::UnsupportedLocale(locale));
        }
        debug!(from = %state.active, to = %locale, "active locale changed");
        state.active = locale;
        Ok(())
    }

    /// The selected locale, or `None` before `initialize`. May name a
    /// locale without a catalog (see [`LocaleResolver::initialize`]).
    #[must_use]
    pub fn active_locale(&self) -> Option<Locale> {
        self.state.as_ref().map(|s| s.active)
    }

    /// The fallback locale, or `None` before `initialize`.
    #[must_use]
    pub fn fallback_locale(&self) -> Option<Locale> {
        self.state.as_ref().map(|s| s.fallback)
    }

    /// Registered locales, sorted by tag. Empty before `initialize`.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self
            .state
            .as_ref()
            .map(|s| s.catalogs.keys().copied().collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Whether `initialize` has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn catalogs() -> Vec<MessageCatalog> {
        vec![
            MessageCatalog::from_fn(Locale::EnUs, |k| format!("en:{}", k.name())),
            MessageCatalog::from_fn(Locale::ZhCn, |k| format!("zh:{}", k.name())),
        ]
    }

    fn ready_resolver(active: Locale, fallback: Locale) -> LocaleResolver {
        let mut resolver = LocaleResolver::new();
        resolver
            .initialize(catalogs(), active, fallback)
            .unwrap_or_else(|err| panic!("initialize failed: {err}"));
        resolver
    }

    #[test]
    fn uninitialized_resolver_fails_loud() {
        let mut resolver = LocaleResolver::new();
        assert_eq!(
            resolver.t("aside.name.simulator"),
            Err(I18nError::NotInitialized)
        );
        assert_eq!(
            resolver.message(MessageKey::Simulator),
            Err(I18nError::NotInitialized)
        );
        assert_eq!(
            resolver.set_active_locale(Locale::EnUs),
            Err(I18nError::NotInitialized)
        );
        assert_eq!(resolver.active_locale(), None);
        assert!(resolver.locales().is_empty());
        assert!(!resolver.is_initialized());
    }

    #[test]
    fn lookup_answers_from_active_catalog() {
        let resolver = ready_resolver(Locale::EnUs, Locale::ZhCn);
        assert_eq!(
            resolver.t("aside.name.simulator").unwrap(),
            "en:aside.name.simulator"
        );
        assert_eq!(
            resolver.message(MessageKey::AplEditor).unwrap(),
            "en:aside.name.apl-editor"
        );
    }

    #[test]
    fn switch_is_visible_on_next_lookup() {
        let mut resolver = ready_resolver(Locale::EnUs, Locale::ZhCn);
        resolver.set_active_locale(Locale::ZhCn).unwrap();
        assert_eq!(
            resolver.t("aside.name.simulator").unwrap(),
            "zh:aside.name.simulator"
        );
        assert_eq!(resolver.active_locale(), Some(Locale::ZhCn));
    }

    #[test]
    #[traced_test]
    fn failed_switch_keeps_previous_locale() {
        // Only register zh-CN, then ask for en-US.
        let mut resolver = LocaleResolver::new();
        resolver
            .initialize(
                vec![MessageCatalog::from_fn(Locale::ZhCn, |k| k.name())],
                Locale::ZhCn,
                Locale::ZhCn,
            )
            .unwrap();
        assert_eq!(
            resolver.set_active_locale(Locale::EnUs),
            Err(I18nError::UnsupportedLocale(Locale::EnUs))
        );
        assert_eq!(resolver.active_locale(), Some(Locale::ZhCn));
        assert_eq!(
            resolver.t("aside.name.simulator").unwrap(),
            "aside.name.simulator"
        );
        assert!(logs_contain("unsupported locale"));
    }

    #[test]
    fn unregistered_active_falls_back_at_lookup() {
        let mut resolver = LocaleResolver::new();
        resolver
            .initialize(
                vec![MessageCatalog::from_fn(Locale::ZhCn, |k| {
                    format!("zh:{}", k.name())
                })],
                Locale::EnUs,
                Locale::ZhCn,
            )
            .unwrap();
        // The requested locale is kept, but every lookup uses the fallback.
        assert_eq!(resolver.active_locale(), Some(Locale::EnUs));
        for key in MessageKey::ALL {
            assert_eq!(resolver.message(key).unwrap(), format!("zh:{}", key.name()));
        }
    }

    #[test]
    fn unregistered_fallback_rejected_at_initialize() {
        let mut resolver = LocaleResolver::new();
        let err = resolver
            .initialize(
                vec![MessageCatalog::from_fn(Locale::ZhCn, |k| k.name())],
                Locale::ZhCn,
                Locale::EnUs,
            )
            .unwrap_err();
        assert_eq!(err, I18nError::UnsupportedLocale(Locale::EnUs));
        assert!(!resolver.is_initialized());
    }

    #[test]
    fn unknown_key_rejected_not_blanked() {
        let resolver = ready_resolver(Locale::EnUs, Locale::ZhCn);
        assert_eq!(
            resolver.t("not.a.real.key"),
            Err(I18nError::UnknownKey("not.a.real.key".to_string()))
        );
    }

    #[test]
    fn reinitialize_last_write_wins() {
        let mut resolver = ready_resolver(Locale::EnUs, Locale::ZhCn);
        resolver
            .initialize(
                vec![MessageCatalog::from_fn(Locale::ZhCn, |k| {
                    format!("v2:{}", k.name())
                })],
                Locale::ZhCn,
                Locale::ZhCn,
            )
            .unwrap();
        assert_eq!(resolver.locales(), vec![Locale::ZhCn]);
        assert_eq!(
            resolver.t("aside.name.simulator").unwrap(),
            "v2:aside.name.simulator"
        );
    }

    #[test]
    fn format_substitutes_placeholders() {
        let mut resolver = LocaleResolver::new();
        resolver
            .initialize(
                vec![MessageCatalog::from_fn(Locale::EnUs, |k| match k {
                    MessageKey::Simulator => "Simulating {character}".to_string(),
                    other => other.name().to_string(),
                })],
                Locale::EnUs,
                Locale::EnUs,
            )
            .unwrap();
        assert_eq!(
            resolver
                .format("aside.name.simulator", &[("character", "Yuzuha")])
                .unwrap(),
            "Simulating Yuzuha"
        );
        // Missing args leave the token intact.
        assert_eq!(
            resolver.format("aside.name.simulator", &[]).unwrap(),
            "Simulating {character}"
        );
    }

    #[test]
    fn locales_listing_is_sorted() {
        let resolver = ready_resolver(Locale::ZhCn, Locale::ZhCn);
        assert_eq!(resolver.locales(), vec![Locale::EnUs, Locale::ZhCn]);
    }
}
