//! Memory facts: short statements always treated as true for the persona.

use serde::{Deserialize, Serialize};

/// A single memory fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryFact {
    /// Unique ID for this fact
    #[serde(default)]
    pub id: String,

    /// The memory line (short and clear)
    #[serde(default)]
    pub fact: String,

    /// Optional label like "Work", "Family", "Rules"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fact_serialization() {
        let fact = MemoryFact {
            id: "mem_001".into(),
            fact: "Works night shifts".into(),
            tag: Some("Work".into()),
            created_at: 10,
            updated_at: None,
        };
        let json = serde_json::to_string(&fact).unwrap();
        assert!(json.contains("createdAt"));
        assert!(!json.contains("updatedAt"));
    }
}
