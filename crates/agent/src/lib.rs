//! Context compilation and question answering for twinvoice.
//!
//! A question flows through two stages:
//!
//! 1. **Compile**: load the stored answers, account, connections, selection,
//!    memory facts and corrections, and turn them into one instruction
//!    string ([`context`])
//! 2. **Ask**: send that string plus the question to the provider exactly
//!    once and normalize the result ([`AskPipeline`])
//!
//! Compilation is pure and synchronous. Only the provider call is async.

pub mod ask;
pub mod context;

#[cfg(test)]
mod test_helpers;

pub use ask::{compile_session, AskOutcome, AskPipeline};
pub use context::{
    compile_context, AssemblyInput, CompiledContext, CompiledProfile, ContextSettings,
    ContextSources, CorrectionExample, PromptAssembler, Readiness, SpeakerTarget,
};
