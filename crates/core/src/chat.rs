//! Recently answered questions, kept for quick re-asking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentChat {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// "Speaker: …\nTarget: …" as used for this answer
    #[serde(default)]
    pub used_persona: String,
    #[serde(default)]
    pub used_profile: String,
}
