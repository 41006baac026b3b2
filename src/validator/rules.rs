//! Rejection reasons and the originality rule

use crate::core::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a candidate was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than four letters; dropped without an alert
    TooShort,
    /// Uses letters the root word does not have (or not enough of them)
    NotPossible,
    /// Already accepted this game, or the root word itself
    NotOriginal,
    /// Not in the dictionary for the configured language
    NotReal,
}

impl Rejection {
    /// Short alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::NotPossible => "Word not possible",
            Self::NotOriginal => "Word used already",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Alert body
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Words need at least four letters.",
            Self::NotPossible => "You can't spell that word from the root word.",
            Self::NotOriginal => "Be more original.",
            Self::NotReal => "You can't just make them up, you know!",
        }
    }

    /// Whether front ends should drop this rejection without telling the user
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::TooShort)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "word is too short"),
            Self::NotPossible => write!(f, "word cannot be built from the root word"),
            Self::NotOriginal => write!(f, "word has already been used"),
            Self::NotReal => write!(f, "word is not in the dictionary"),
        }
    }
}

impl std::error::Error for Rejection {}

/// How the originality check treats repeated words
///
/// `Strict` rejects words already accepted and the root word itself.
/// `Legacy` keeps the historical predicate
/// `!used.contains(word) || word != root`, which passes every word that
/// differs from the root and so never rejects duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginalityRule {
    #[default]
    Strict,
    Legacy,
}

impl OriginalityRule {
    /// Parse a rule name ("strict" or "legacy", case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }

    /// Whether `word` counts as original in `state`
    #[must_use]
    pub fn allows(self, word: &str, state: &GameState) -> bool {
        match self {
            Self::Strict => !state.has_used(word) && word != state.root_word(),
            Self::Legacy => !state.has_used(word) || word != state.root_word(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_too_short_is_silent() {
        assert!(Rejection::TooShort.is_silent());
        assert!(!Rejection::NotPossible.is_silent());
        assert!(!Rejection::NotOriginal.is_silent());
        assert!(!Rejection::NotReal.is_silent());
    }

    #[test]
    fn alert_titles_are_distinct() {
        let titles = [
            Rejection::NotPossible.title(),
            Rejection::NotOriginal.title(),
            Rejection::NotReal.title(),
        ];
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
        assert_ne!(titles[0], titles[2]);
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::NotReal.to_string(), "word is not in the dictionary");
        assert_eq!(Rejection::TooShort.to_string(), "word is too short");
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(OriginalityRule::from_name("strict"), Some(OriginalityRule::Strict));
        assert_eq!(OriginalityRule::from_name("LEGACY"), Some(OriginalityRule::Legacy));
        assert_eq!(OriginalityRule::from_name("lenient"), None);
    }

    #[test]
    fn rule_name_round_trips() {
        for rule in [OriginalityRule::Strict, OriginalityRule::Legacy] {
            assert_eq!(OriginalityRule::from_name(rule.name()), Some(rule));
        }
    }

    #[test]
    fn strict_rejects_duplicates_and_root() {
        let state = GameState::new("silent").accept("lines".to_string());
        let rule = OriginalityRule::Strict;

        assert!(!rule.allows("lines", &state));
        assert!(!rule.allows("silent", &state));
        assert!(rule.allows("tiles", &state));
    }

    #[test]
    fn legacy_lets_duplicates_through() {
        let state = GameState::new("silent").accept("lines".to_string());
        let rule = OriginalityRule::Legacy;

        assert!(rule.allows("lines", &state));
        assert!(rule.allows("silent", &state));
        assert!(rule.allows("tiles", &state));
    }

    #[test]
    fn rule_deserializes_lowercase() {
        let rule: OriginalityRule = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(rule, OriginalityRule::Legacy);
        assert_eq!(serde_json::to_string(&OriginalityRule::Strict).unwrap(), "\"strict\"");
    }
}
