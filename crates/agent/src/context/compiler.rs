//! One-shot context compilation from already-loaded records.
//!
//! Never touches storage and never fails: every input has a default.
//! The result lives for a single request and is not cached.

use crate::context::assembler::{AssemblyInput, PromptAssembler};
use crate::context::corrections::{self, CorrectionExample};
use crate::context::facts::memory_facts_block;
use crate::context::persona::{persona_block, resolve_persona, resolve_speaker_target, SpeakerTarget};
use crate::context::profile::{self, CompiledProfile};
use twinvoice_config::ContextConfig;
use twinvoice_core::{
    Account, AnswerRecord, Connection, CorrectionRecord, MemoryFact, PersonaInput,
    SpeakerTargetPair,
};

/// Minimum filled answers before the persona counts as ready.
pub const MIN_FILLED_ANSWERS: usize = 3;

/// Loaded records the compiler reads from.
#[derive(Debug, Clone, Copy)]
pub struct ContextSources<'a> {
    pub answers: &'a AnswerRecord,
    pub account: Option<&'a Account>,
    pub connections: &'a [Connection],
    pub selection: &'a SpeakerTargetPair,
    /// Newest first.
    pub corrections: &'a [CorrectionRecord],
    /// Newest first.
    pub memory_facts: &'a [MemoryFact],
}

/// Limits applied while compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSettings {
    pub corrections_limit: usize,
    pub memory_facts_limit: usize,
    pub profile_max_chars: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self::from(&ContextConfig::default())
    }
}

impl From<&ContextConfig> for ContextSettings {
    fn from(config: &ContextConfig) -> Self {
        Self {
            corrections_limit: config.corrections_limit,
            memory_facts_limit: config.memory_facts_limit,
            profile_max_chars: config.profile_max_chars,
        }
    }
}

/// Request-scoped compiled context.
#[derive(Debug, Clone)]
pub struct CompiledContext {
    pub profile: CompiledProfile,
    pub persona: PersonaInput,
    pub persona_block: String,
    pub speaker_target: SpeakerTarget,
    pub memory_facts_block: Option<String>,
    pub corrections: Vec<CorrectionExample>,
    pub corrections_block: Option<String>,
    /// The assembled instruction string.
    pub system_prompt: String,
}

impl CompiledContext {
    pub fn profile_text(&self) -> &str {
        &self.profile.text
    }

    pub fn filled_count(&self) -> usize {
        self.profile.filled_count
    }
}

pub fn compile_context(sources: &ContextSources<'_>, settings: &ContextSettings) -> CompiledContext {
    let profile = profile::compile(sources.answers);
    let speaker_target =
        resolve_speaker_target(sources.account, sources.connections, sources.selection);
    let persona = PersonaInput::Structured(resolve_persona(
        sources.account,
        sources.connections,
        &speaker_target.pair.speaker,
    ));
    let corrections = corrections::sample(sources.corrections, settings.corrections_limit);
    let memory_facts = memory_facts_block(sources.memory_facts, settings.memory_facts_limit);
    let rules = speaker_target.rule_block();

    let system_prompt = PromptAssembler::new(settings.profile_max_chars).assemble(&AssemblyInput {
        persona: &persona,
        speaker_target: rules.as_deref(),
        profile_text: &profile.text,
        memory_facts: memory_facts.as_deref(),
        corrections: &corrections,
    });

    CompiledContext {
        persona_block: persona_block(&persona),
        corrections_block: corrections::corrections_block(&corrections),
        profile,
        persona,
        speaker_target,
        memory_facts_block: memory_facts,
        corrections,
        system_prompt,
    }
}

/// Whether enough setup exists for useful answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    pub name_ok: bool,
    pub interview_ok: bool,
    pub filled: usize,
}

impl Readiness {
    pub fn evaluate(account: Option<&Account>, answers: &AnswerRecord) -> Self {
        let filled = answers.filled_count();
        Self {
            name_ok: account.and_then(Account::name).is_some(),
            interview_ok: filled >= MIN_FILLED_ANSWERS,
            filled,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.name_ok && self.interview_ok
    }
}
