//! Profile compilation: interview answers to an ordered summary.
//!
//! The schedule is a data table, one row per logical question, grouped by
//! topic. Each row lists its candidate identifiers newest schema first, so a
//! future identifier generation is a table edit rather than new code.
//!
//! Output order always follows the table, never the record.

use crate::context::choices::{self, ChoiceMap};
use crate::context::fields;
use twinvoice_core::{clamp, AnswerRecord};

/// Budget for short answers (words, scales, enumerations).
pub const SHORT_BUDGET: usize = 160;
/// Budget for long free-text answers.
pub const LONG_BUDGET: usize = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Identity,
    Voice,
    Values,
    Decisions,
    Emotions,
    Relationships,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Identity => "Identity",
            Section::Voice => "Voice & Style",
            Section::Values => "Values & Boundaries",
            Section::Decisions => "Decisions",
            Section::Emotions => "Emotions & Stress",
            Section::Relationships => "Relationships",
        }
    }
}

/// One logical question and where its answer may be stored.
#[derive(Debug, Clone, Copy)]
pub struct LogicalField {
    pub section: Section,
    pub label: &'static str,
    /// Most-preferred identifier first.
    pub candidates: &'static [&'static str],
    pub choices: Option<&'static ChoiceMap>,
    /// Candidates that hold free text even though the field is enumerated.
    pub free_text: &'static [&'static str],
    pub budget: usize,
}

impl LogicalField {
    const fn short(
        section: Section,
        label: &'static str,
        candidates: &'static [&'static str],
    ) -> Self {
        Self {
            section,
            label,
            candidates,
            choices: None,
            free_text: &[],
            budget: SHORT_BUDGET,
        }
    }

    const fn long(
        section: Section,
        label: &'static str,
        candidates: &'static [&'static str],
    ) -> Self {
        Self {
            budget: LONG_BUDGET,
            ..Self::short(section, label, candidates)
        }
    }

    const fn choice(
        section: Section,
        label: &'static str,
        candidates: &'static [&'static str],
        map: &'static ChoiceMap,
    ) -> Self {
        Self {
            choices: Some(map),
            ..Self::short(section, label, candidates)
        }
    }

    const fn with_free_text(self, ids: &'static [&'static str]) -> Self {
        Self {
            free_text: ids,
            ..self
        }
    }

    /// Resolved, labeled, and clamped value; `""` when unanswered.
    pub fn render(&self, record: &AnswerRecord) -> String {
        let Some((source, value)) = fields::resolve_with_source(record, self.candidates) else {
            return String::new();
        };
        let value = match self.choices {
            Some(map) if !self.free_text.contains(&source) => choices::label(value, map),
            _ => value,
        };
        clamp(value, self.budget)
    }
}

use Section::*;

/// The fixed profile schedule.
pub static SCHEDULE: &[LogicalField] = &[
    // Identity
    LogicalField::short(Identity, "Identity words", &["identity_words", "identity_1"]),
    LogicalField::long(Identity, "Most proud of", &["identity_pride"]),
    LogicalField::short(Identity, "Confidence (1–5)", &["identity_confidence"]),
    LogicalField::short(Identity, "Energy (1–5)", &["identity_energy"]),
    // Voice
    LogicalField::choice(Voice, "Tone", &["identity_tone", "voice_1"], choices::TONE)
        .with_free_text(&["voice_1"]),
    LogicalField::long(Voice, "Phrases", &["voice_phrases", "voice_2"]),
    LogicalField::long(Voice, "Never say", &["voice_never", "voice_3"]),
    LogicalField::short(Voice, "Answer style preference", &["voice_detail", "advice_4"]),
    // Values
    LogicalField::short(Values, "Values", &["values_top3", "values_1"]),
    LogicalField::choice(Values, "Main priority", &["values_choice", "values_2"], choices::PRIORITY),
    LogicalField::short(Values, "Risk comfort (1–5)", &["values_risk"]),
    LogicalField::long(Values, "When unfair", &["values_fairness"]),
    LogicalField::long(Values, "Non-negotiable", &["values_nonnegotiable", "values_3"]),
    // Decisions
    LogicalField::choice(
        Decisions,
        "Decision speed",
        &["decisions_speed", "decisions_2"],
        choices::DECISION_SPEED,
    ),
    LogicalField::choice(
        Decisions,
        "Decision style",
        &["decisions_style", "decisions_1"],
        choices::DECISION_STYLE,
    ),
    LogicalField::long(Decisions, "Under pressure", &["decisions_pressure"]),
    LogicalField::short(Decisions, "Regret tendency (1–5)", &["decisions_regret"]),
    LogicalField::long(Decisions, "Recent good decision", &["decisions_example"]),
    // Emotions
    LogicalField::long(Emotions, "Calm under stress", &["emotions_calm", "emotions_1"]),
    LogicalField::short(Emotions, "Stress lately (1–5)", &["emotions_stress_level"]),
    LogicalField::choice(
        Emotions,
        "When angry",
        &["emotions_anger_style", "emotions_2"],
        choices::ANGER_STYLE,
    ),
    LogicalField::short(Emotions, "Apologizing (1–5)", &["emotions_apology"]),
    LogicalField::long(Emotions, "Trigger", &["emotions_trigger", "emotions_3"]),
    // Relationships
    LogicalField::choice(
        Relationships,
        "Shows love via",
        &["relationships_love_language", "relationships_1"],
        choices::LOVE_LANGUAGE,
    ),
    LogicalField::choice(
        Relationships,
        "Conflict style",
        &["relationships_conflict", "relationships_2"],
        choices::CONFLICT_STYLE,
    ),
    LogicalField::long(Relationships, "Feedback preference", &["relationships_feedback"]),
    LogicalField::short(Relationships, "Trust", &["relationships_trust", "relationships_3"]),
    LogicalField::long(Relationships, "Repeated advice", &["relationships_advice", "advice_1"]),
];

/// Result of compiling an answer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledProfile {
    /// `"<Label>: <value>"`, in schedule order.
    pub lines: Vec<String>,
    /// `lines` joined with newlines; empty when there are no lines.
    pub text: String,
    /// Non-empty raw identifiers in the whole record, legacy ones included.
    pub filled_count: usize,
}

impl CompiledProfile {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Compile a record against the built-in schedule.
pub fn compile(record: &AnswerRecord) -> CompiledProfile {
    compile_with(record, SCHEDULE)
}

pub fn compile_with(record: &AnswerRecord, schedule: &[LogicalField]) -> CompiledProfile {
    let lines: Vec<String> = schedule
        .iter()
        .filter_map(|field| {
            let value = field.render(record);
            (!value.is_empty()).then(|| format!("{}: {}", field.label, value))
        })
        .collect();
    let text = lines.join("\n");
    CompiledProfile {
        lines,
        text,
        filled_count: record.filled_count(),
    }
}

/// Rendered lines grouped by section, in schedule order. Sections with no
/// answered field are left out.
pub fn by_section(record: &AnswerRecord) -> Vec<(Section, Vec<String>)> {
    let mut groups: Vec<(Section, Vec<String>)> = Vec::new();
    for field in SCHEDULE {
        let value = field.render(record);
        if value.is_empty() {
            continue;
        }
        let line = format!("{}: {}", field.label, value);
        match groups.last_mut() {
            Some((section, lines)) if *section == field.section => lines.push(line),
            _ => groups.push((field.section, vec![line])),
        }
    }
    groups
}
