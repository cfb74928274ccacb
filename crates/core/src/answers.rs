//! Raw interview answers keyed by field identifier.
//!
//! Two generations of identifiers coexist in one record (`identity_words`
//! next to the older `identity_1`). The record does not know which is which;
//! merging happens in the profile compiler's candidate table.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Mapping from field identifier to free-text answer.
///
/// Blank or whitespace-only values count as absent. A `BTreeMap` keeps
/// serialization order stable, which keeps stored bytes deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerRecord(BTreeMap<String, String>);

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for an identifier, untrimmed.
    pub fn raw(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Trimmed value for an identifier; `""` when absent.
    pub fn trimmed(&self, id: &str) -> &str {
        self.raw(id).map(str::trim).unwrap_or("")
    }

    /// Set an answer. A blank value removes the identifier instead.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&id);
        } else {
            self.0.insert(id, value);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id).is_some()
    }

    /// Number of identifiers with a non-empty trimmed value.
    ///
    /// Current and legacy identifiers are counted separately even when they
    /// answer the same logical question: this measures interview effort,
    /// not merged coverage.
    pub fn filled_count(&self) -> usize {
        self.0.values().filter(|v| !v.trim().is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// Stored records may carry non-string values; those are not answers.
impl<'de> Deserialize<'de> for AnswerRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(k, v)| match v {
                    serde_json::Value::String(s) => Some((k, s)),
                    _ => None,
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_count_ignores_blank_values() {
        let record: AnswerRecord = [
            ("identity_words", "calm, direct"),
            ("identity_1", "kind"),
            ("values_1", "   "),
            ("values_top3", ""),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.filled_count(), 2);
    }

    #[test]
    fn set_blank_removes() {
        let mut record = AnswerRecord::new();
        record.set("voice_phrases", "no worries");
        assert_eq!(record.trimmed("voice_phrases"), "no worries");
        record.set("voice_phrases", "  ");
        assert!(record.raw("voice_phrases").is_none());
    }

    #[test]
    fn trimmed_missing_is_empty() {
        assert_eq!(AnswerRecord::new().trimmed("identity_pride"), "");
    }

    #[test]
    fn non_string_values_are_dropped_on_load() {
        let record: AnswerRecord =
            serde_json::from_str(r#"{"identity_1":"kind","identity_energy":4,"x":null}"#)
                .unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.trimmed("identity_1"), "kind");
    }
}
