//! Speaker/target selection for a conversation session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a person: the account holder, or a connection by id.
///
/// Stored as a plain string: `"self"` or the connection identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersonRef {
    #[default]
    Myself,
    Connection(String),
}

impl PersonRef {
    pub const SELF_TOKEN: &'static str = "self";

    pub fn is_self(&self) -> bool {
        matches!(self, PersonRef::Myself)
    }

    pub fn connection(id: impl Into<String>) -> Self {
        PersonRef::from(id.into())
    }
}

impl From<String> for PersonRef {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::SELF_TOKEN) {
            PersonRef::Myself
        } else {
            PersonRef::Connection(trimmed.to_string())
        }
    }
}

impl From<&str> for PersonRef {
    fn from(value: &str) -> Self {
        PersonRef::from(value.to_string())
    }
}

impl From<PersonRef> for String {
    fn from(value: PersonRef) -> Self {
        match value {
            PersonRef::Myself => PersonRef::SELF_TOKEN.to_string(),
            PersonRef::Connection(id) => id,
        }
    }
}

impl fmt::Display for PersonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonRef::Myself => f.write_str(Self::SELF_TOKEN),
            PersonRef::Connection(id) => f.write_str(id),
        }
    }
}

/// Who speaks and who the question is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerTargetPair {
    #[serde(default)]
    pub speaker: PersonRef,

    #[serde(default)]
    pub target: PersonRef,
}

impl SpeakerTargetPair {
    pub fn new(speaker: impl Into<PersonRef>, target: impl Into<PersonRef>) -> Self {
        Self {
            speaker: speaker.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_token_roundtrip() {
        let pair = SpeakerTargetPair::new("self", "c-42");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"speaker":"self","target":"c-42"}"#);
        let back: SpeakerTargetPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn blank_reference_is_self() {
        assert!(PersonRef::from("  ").is_self());
        assert!(PersonRef::from("SELF").is_self());
        assert_eq!(PersonRef::from(" c1 "), PersonRef::Connection("c1".into()));
    }

    #[test]
    fn missing_fields_default_to_self() {
        let pair: SpeakerTargetPair = serde_json::from_str("{}").unwrap();
        assert!(pair.speaker.is_self());
        assert!(pair.target.is_self());
    }
}
