//! Prompt assembly: the final instruction string.
//!
//! Sections, in order:
//!
//! 1. **Safety preamble**: always present, verbatim
//! 2. **Persona**: always present, placeholder when absent
//! 3. **Speaker / target rules**: only when a connection is involved
//! 4. **User profile**: always labeled, placeholder when empty
//! 5. **Memory facts**: only when facts exist
//! 6. **Corrections**: only when usable corrections exist
//!
//! Sections are separated by one blank line. An omitted section leaves no
//! header and no extra separator. Order matters downstream: earlier
//! instructions take precedence.
//!
//! # Determinism
//!
//! Assembly is a pure function of its input. Nothing here reads the clock,
//! the store, or any randomness.

use crate::context::corrections::{corrections_block, CorrectionExample};
use crate::context::persona::persona_block;
use twinvoice_core::{clamp, PersonaInput};

/// Fixed identity and safety instructions.
pub const SAFETY_PREAMBLE: [&str; 5] = [
    "You are an AI representation trained from the user's interview answers.",
    "You are NOT the real person. Never claim you are conscious or literally them.",
    "Answer in first-person style (as the user), but do not manipulate or guilt the user.",
    "Avoid medical, legal, or financial instructions. If asked, give general guidance and suggest a professional.",
    "Be concise, warm, and practical.",
];

pub const PROFILE_HEADER: &str = "USER PROFILE (from interview):";
pub const NO_PROFILE: &str = "(No profile provided.)";

/// Default cap on the profile text placed in the prompt.
pub const DEFAULT_PROFILE_MAX_CHARS: usize = 2200;

const SECTION_SEPARATOR: &str = "\n\n";

/// Everything the assembler needs for one prompt.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub persona: &'a PersonaInput,
    /// Rendered speaker/target rules, if any.
    pub speaker_target: Option<&'a str>,
    /// Compiled profile text; may be empty.
    pub profile_text: &'a str,
    /// Rendered memory facts block, if any.
    pub memory_facts: Option<&'a str>,
    pub corrections: &'a [CorrectionExample],
}

/// Stateless prompt assembler. Create one and reuse it.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    profile_max_chars: usize,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_MAX_CHARS)
    }
}

impl PromptAssembler {
    pub fn new(profile_max_chars: usize) -> Self {
        Self { profile_max_chars }
    }

    /// The profile section: header plus clamped text or the placeholder.
    pub fn profile_block(&self, profile_text: &str) -> String {
        let text = clamp(profile_text, self.profile_max_chars);
        let body = if text.is_empty() { NO_PROFILE } else { text.as_str() };
        format!("{PROFILE_HEADER}\n{body}")
    }

    pub fn assemble(&self, input: &AssemblyInput<'_>) -> String {
        let sections: [Option<String>; 6] = [
            Some(SAFETY_PREAMBLE.join("\n")),
            Some(persona_block(input.persona)),
            non_blank(input.speaker_target),
            Some(self.profile_block(input.profile_text)),
            non_blank(input.memory_facts),
            corrections_block(input.corrections),
        ];
        sections
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }
}

fn non_blank(section: Option<&str>) -> Option<String> {
    section
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinvoice_core::{PersonaDescriptor, Relationship, Tone};

    fn empty_input(persona: &PersonaInput) -> AssemblyInput<'_> {
        AssemblyInput {
            persona,
            speaker_target: None,
            profile_text: "",
            memory_facts: None,
            corrections: &[],
        }
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in prompt"))
    }

    #[test]
    fn empty_inputs_give_preamble_persona_and_placeholder_only() {
        let persona = PersonaInput::Absent;
        let prompt = PromptAssembler::default().assemble(&empty_input(&persona));

        assert!(prompt.starts_with(SAFETY_PREAMBLE[0]));
        assert!(prompt.ends_with("USER PROFILE (from interview):\n(No profile provided.)"));
        assert!(!prompt.contains("CORRECTIONS"));
        assert!(!prompt.contains("MEMORY FACTS"));
        assert!(!prompt.contains("SPEAKER / TARGET"));
        assert!(!prompt.contains("\n\n\n"));
        assert_eq!(prompt.matches(SECTION_SEPARATOR).count(), 2);
    }

    #[test]
    fn all_sections_in_fixed_order() {
        let persona = PersonaInput::Structured(PersonaDescriptor {
            name: "Ana".into(),
            relationship: Relationship::Myself,
            tone: Tone::Warm,
            description: "Nurse".into(),
        });
        let corrections = vec![CorrectionExample {
            question: "Tea?".into(),
            prior_answer: None,
            corrected_answer: "Always.".into(),
        }];
        let input = AssemblyInput {
            persona: &persona,
            speaker_target: Some("SPEAKER / TARGET:\nSpeaker: Ana\nTarget: Dad (Father)"),
            profile_text: "Identity words: calm",
            memory_facts: Some("MEMORY FACTS (always treat these as true for this persona):\n- Lives in Porto"),
            corrections: &corrections,
        };
        let prompt = PromptAssembler::default().assemble(&input);

        let order = [
            position(&prompt, "You are an AI representation"),
            position(&prompt, "PERSONA:"),
            position(&prompt, "SPEAKER / TARGET:"),
            position(&prompt, "USER PROFILE"),
            position(&prompt, "MEMORY FACTS"),
            position(&prompt, "CORRECTIONS"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
        assert!(prompt.contains("USER PROFILE (from interview):\nIdentity words: calm"));
    }

    #[test]
    fn blank_optional_sections_are_omitted() {
        let persona = PersonaInput::Absent;
        let input = AssemblyInput {
            speaker_target: Some("   "),
            memory_facts: Some(""),
            ..empty_input(&persona)
        };
        let prompt = PromptAssembler::default().assemble(&input);
        assert_eq!(prompt, PromptAssembler::default().assemble(&empty_input(&persona)));
    }

    #[test]
    fn profile_text_is_capped() {
        let assembler = PromptAssembler::new(10);
        assert_eq!(
            assembler.profile_block("Identity words: calm"),
            "USER PROFILE (from interview):\nIdentity w"
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let persona = PersonaInput::FreeText("A patient teacher".into());
        let input = AssemblyInput {
            profile_text: "Values: honesty",
            ..empty_input(&persona)
        };
        let assembler = PromptAssembler::default();
        assert_eq!(assembler.assemble(&input), assembler.assemble(&input));
    }
}
