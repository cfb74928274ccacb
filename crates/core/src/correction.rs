//! User-supplied answer corrections, used as style exemplars.

use serde::{Deserialize, Serialize};

/// One correction: the question, what the model said, and what the user
/// would actually have answered. Histories are kept newest-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub question: String,

    #[serde(default, alias = "aiAnswer", skip_serializing_if = "Option::is_none")]
    pub prior_answer: Option<String>,

    #[serde(default)]
    pub corrected_answer: String,

    /// Epoch milliseconds
    #[serde(default)]
    pub created_at: i64,
}

impl CorrectionRecord {
    pub fn new(
        question: impl Into<String>,
        prior_answer: Option<String>,
        corrected_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.into(),
            prior_answer,
            corrected_answer: corrected_answer.into(),
            created_at: crate::now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_legacy_field_names() {
        let c: CorrectionRecord = serde_json::from_str(
            r#"{"id":"1","question":"Q","aiAnswer":"A","correctedAnswer":"B","createdAt":5}"#,
        )
        .unwrap();
        assert_eq!(c.prior_answer.as_deref(), Some("A"));
        assert_eq!(c.corrected_answer, "B");
        assert_eq!(c.created_at, 5);
    }

    #[test]
    fn new_assigns_id_and_timestamp() {
        let c = CorrectionRecord::new("Q", None, "B");
        assert!(!c.id.is_empty());
        assert!(c.created_at > 0);
    }
}
