//! The catalogs APLSim ships with.
//!
//! Simplified Chinese is the reference catalog; English is its translation.
//! Both are built through [`MessageCatalog::from_fn`], so an exhaustive
//! `match` guarantees completeness at compile time: adding a key to the
//! schema without translating it here is a build break, not a runtime gap.

use crate::catalog::MessageCatalog;
use crate::key::MessageKey;
use crate::locale::Locale;
use crate::resolver::LocaleResolver;

/// The Simplified Chinese catalog (the reference).
#[must_use]
pub fn zh_cn() -> MessageCatalog {
    MessageCatalog::from_fn(Locale::ZhCn, |key| match key {
        MessageKey::AplEditor => "APL 编辑器",
        MessageKey::AplSpecification => "APL 设计书",
        MessageKey::CharacterConfiguration => "角色配置",
        MessageKey::CharacterSupportList => "角色支持列表",
        MessageKey::ContributionGuide => "贡献指南",
        MessageKey::DataAnalysis => "数据分析",
        MessageKey::SessionManagement => "会话管理",
        MessageKey::Simulator => "模拟器",
    })
}

/// The American English catalog.
#[must_use]
pub fn en_us() -> MessageCatalog {
    MessageCatalog::from_fn(Locale::EnUs, |key| match key {
        MessageKey::AplEditor => "APL Editor",
        MessageKey::AplSpecification => "APL Spec.",
        MessageKey::CharacterConfiguration => "Characters",
        MessageKey::CharacterSupportList => "Character Supports",
        MessageKey::ContributionGuide => "Contribution Guide",
        MessageKey::DataAnalysis => "Analysis",
        MessageKey::SessionManagement => "Session",
        MessageKey::Simulator => "Simulator",
    })
}

/// Every shipped catalog, one per supported locale.
#[must_use]
pub fn builtin_catalogs() -> Vec<MessageCatalog> {
    vec![en_us(), zh_cn()]
}

/// A resolver configured the way the application boots: all shipped
/// catalogs, active and fallback both `zh-CN`.
#[must_use]
pub fn default_resolver() -> LocaleResolver {
    let mut resolver = LocaleResolver::new();
    if let Err(err) = resolver.initialize(builtin_catalogs(), Locale::ZhCn, Locale::ZhCn) {
        // Unreachable: the fallback catalog is shipped above.
        unreachable!("built-in catalogs failed to register: {err}");
    }
    resolver
}
