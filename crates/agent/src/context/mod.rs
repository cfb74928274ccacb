//! Context compilation pipeline.
//!
//! Turns stored interview answers, the account, the speaker/target pair,
//! memory facts and correction history into one bounded instruction string.
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Field resolution | [`fields`] | first non-blank candidate value |
//! | Choice labels | [`choices`] | display label or the code itself |
//! | Profile | [`profile`] | ordered `Label: value` lines + filled count |
//! | Persona | [`persona`] | descriptor, speaker/target labels and rules |
//! | Corrections | [`corrections`] | newest usable examples, clamped |
//! | Memory facts | [`facts`] | optional facts block |
//! | Assembly | [`assembler`] | the final prompt, sections in fixed order |
//!
//! All stages are synchronous and pure.

pub mod assembler;
pub mod choices;
pub mod compiler;
pub mod corrections;
pub mod facts;
pub mod fields;
pub mod persona;
pub mod profile;

pub use assembler::{AssemblyInput, PromptAssembler};
pub use compiler::{compile_context, CompiledContext, ContextSettings, ContextSources, Readiness};
pub use corrections::CorrectionExample;
pub use persona::{resolve_persona, resolve_speaker_target, SpeakerTarget};
pub use profile::CompiledProfile;
