//! The message schema: the closed set of valid lookup keys.
//!
//! Keys are dot-segmented strings (`aside.name.simulator`). The dots are a
//! naming convention for humans; lookup treats each key as a flat, opaque
//! identifier. The schema is defined once here and every catalog is checked
//! against it, so a key that exists in one locale exists in all of them.
//!
//! Key spellings are frozen to the shipped data tables, including
//! `aside.name.session-managerment`.

/// A valid message lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// `aside.name.apl-editor`
    AplEditor,
    /// `aside.name.apl-specification`
    AplSpecification,
    /// `aside.name.character-configuration`
    CharacterConfiguration,
    /// `aside.name.character-support-list`
    CharacterSupportList,
    /// `aside.name.contribution-guide`
    ContributionGuide,
    /// `aside.name.data-analysis`
    DataAnalysis,
    /// `aside.name.session-managerment`
    SessionManagement,
    /// `aside.name.simulator`
    Simulator,
}

impl MessageKey {
    /// Every schema key, in a fixed order.
    pub const ALL: [MessageKey; 8] = [
        MessageKey::AplEditor,
        MessageKey::AplSpecification,
        MessageKey::CharacterConfiguration,
        MessageKey::CharacterSupportList,
        MessageKey::ContributionGuide,
        MessageKey::DataAnalysis,
        MessageKey::SessionManagement,
        MessageKey::Simulator,
    ];

    /// Number of keys in the schema.
    pub const COUNT: usize = MessageKey::ALL.len();

    /// The dotted string form of the key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MessageKey::AplEditor => "aside.name.apl-editor",
            MessageKey::AplSpecification => "aside.name.apl-specification",
            MessageKey::CharacterConfiguration => "aside.name.character-configuration",
            MessageKey::CharacterSupportList => "aside.name.character-support-list",
            MessageKey::ContributionGuide => "aside.name.contribution-guide",
            MessageKey::DataAnalysis => "aside.name.data-analysis",
            MessageKey::SessionManagement => "aside.name.session-managerment",
            MessageKey::Simulator => "aside.name.simulator",
        }
    }

    /// Parse a dotted key string. Returns `None` for keys outside the
    /// schema.
    #[must_use]
    pub fn parse(name: &str) -> Option<MessageKey> {
        MessageKey::ALL.into_iter().find(|k| k.name() == name)
    }
}
