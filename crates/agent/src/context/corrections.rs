//! Correction sampling and the corrections block.

use twinvoice_core::{clamp, CorrectionRecord};

pub const QUESTION_BUDGET: usize = 220;
pub const PRIOR_BUDGET: usize = 260;
pub const CORRECTED_BUDGET: usize = 360;

const HEADER: &str = "CORRECTIONS (examples of how the user really answers):";
const DIVIDER: &str = "---";
const GUIDANCE: [&str; 4] = [
    "IMPORTANT:",
    "- Use the corrections as style and tone examples.",
    "- Do NOT copy them word-for-word unless directly relevant.",
    "- Stay consistent with the user's values and decision patterns.",
];

/// A clamped correction, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionExample {
    pub question: String,
    pub prior_answer: Option<String>,
    pub corrected_answer: String,
}

impl CorrectionExample {
    /// `None` when the question or corrected answer is blank.
    pub fn from_record(record: &CorrectionRecord) -> Option<Self> {
        let question = clamp(record.question.as_str(), QUESTION_BUDGET);
        let corrected_answer = clamp(record.corrected_answer.as_str(), CORRECTED_BUDGET);
        if question.is_empty() || corrected_answer.is_empty() {
            return None;
        }
        let prior_answer = Some(clamp(record.prior_answer.as_deref(), PRIOR_BUDGET))
            .filter(|p| !p.is_empty());
        Some(Self {
            question,
            prior_answer,
            corrected_answer,
        })
    }
}

/// The newest `limit` usable corrections, in the given (newest-first) order.
///
/// Unusable entries are skipped before counting, so they never take up a slot.
pub fn sample(corrections: &[CorrectionRecord], limit: usize) -> Vec<CorrectionExample> {
    corrections
        .iter()
        .filter_map(CorrectionExample::from_record)
        .take(limit)
        .collect()
}

/// The corrections block, or `None` when there is nothing to show.
pub fn corrections_block(examples: &[CorrectionExample]) -> Option<String> {
    if examples.is_empty() {
        return None;
    }
    let mut lines = vec![HEADER.to_string()];
    for example in examples {
        lines.push(DIVIDER.to_string());
        lines.push(format!("Q: {}", example.question));
        if let Some(prior) = &example.prior_answer {
            lines.push(format!("Previous AI answer: {prior}"));
        }
        lines.push(format!("User's real answer: {}", example.corrected_answer));
    }
    lines.push(DIVIDER.to_string());
    lines.push(String::new());
    lines.extend(GUIDANCE.iter().map(|s| s.to_string()));
    Some(lines.join("\n"))
}
