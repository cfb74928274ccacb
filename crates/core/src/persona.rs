//! Account, connections, and persona descriptors.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Voice tone chosen for the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Calm,
    #[default]
    Warm,
    Direct,
    Strict,
    Funny,
}

impl Tone {
    pub const ALL: [Tone; 5] = [Tone::Calm, Tone::Warm, Tone::Direct, Tone::Strict, Tone::Funny];

    /// Case-insensitive parse. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Calm => "Calm",
            Tone::Warm => "Warm",
            Tone::Direct => "Direct",
            Tone::Strict => "Strict",
            Tone::Funny => "Funny",
        }
    }

    /// Short behavioral hint for the tone.
    pub fn help(&self) -> &'static str {
        match self {
            Tone::Warm => "Supportive, caring, practical.",
            Tone::Calm => "Steady, reassuring, no drama.",
            Tone::Direct => "Clear, concise, no fluff.",
            Tone::Strict => "Firm, disciplined, high standards.",
            Tone::Funny => "Light humor, friendly, not too much.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Older saves had no tone, or free-form casing.
impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(Tone::parse).unwrap_or_default())
    }
}

/// How a persona relates to the account holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Relationship {
    #[serde(rename = "Self")]
    Myself,
    Father,
    Mother,
    Partner,
    Friend,
    Sibling,
    Child,
    #[default]
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 8] = [
        Relationship::Myself,
        Relationship::Father,
        Relationship::Mother,
        Relationship::Partner,
        Relationship::Friend,
        Relationship::Sibling,
        Relationship::Child,
        Relationship::Other,
    ];

    /// Case-insensitive parse; `"me"` is accepted for self.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("me") {
            return Some(Relationship::Myself);
        }
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Myself => "Self",
            Relationship::Father => "Father",
            Relationship::Mother => "Mother",
            Relationship::Partner => "Partner",
            Relationship::Friend => "Friend",
            Relationship::Sibling => "Sibling",
            Relationship::Child => "Child",
            Relationship::Other => "Other",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(Relationship::parse)
            .unwrap_or_default())
    }
}

/// The account holder's own record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default)]
    pub tone: Tone,
}

impl Account {
    /// Trimmed display name, `None` when blank.
    pub fn name(&self) -> Option<&str> {
        let name = self.display_name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Another person the account holder has connected with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: Relationship,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,

    #[serde(default)]
    pub created_at: i64,
}

/// The identity the model is asked to voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaDescriptor {
    pub name: String,
    pub relationship: Relationship,
    pub tone: Tone,
    pub description: String,
}

/// Persona input normalized at the boundary.
///
/// Callers may hold a structured descriptor, a free-text persona string, or
/// nothing at all; the assembler only ever sees this one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonaInput {
    Structured(PersonaDescriptor),
    FreeText(String),
    #[default]
    Absent,
}

impl From<PersonaDescriptor> for PersonaInput {
    fn from(descriptor: PersonaDescriptor) -> Self {
        Self::Structured(descriptor)
    }
}

impl From<Option<PersonaDescriptor>> for PersonaInput {
    fn from(descriptor: Option<PersonaDescriptor>) -> Self {
        descriptor.map_or(Self::Absent, Self::Structured)
    }
}
