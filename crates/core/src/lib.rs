//! # twinvoice Core
//!
//! Domain types, traits, and error definitions for twinvoice.
//! This crate has **zero framework dependencies**: it defines the domain
//! model that all other crates implement against.
//!
//! Storage and text generation are traits here; implementations live in
//! `twinvoice-store` and `twinvoice-providers`.

pub mod answers;
pub mod chat;
pub mod correction;
pub mod error;
pub mod memory;
pub mod message;
pub mod persona;
pub mod provider;
pub mod sanitize;
pub mod selection;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use answers::AnswerRecord;
pub use chat::RecentChat;
pub use correction::CorrectionRecord;
pub use error::{Error, ProviderError, Result, StoreError};
pub use memory::MemoryFact;
pub use message::{Message, Role};
pub use persona::{Account, Connection, PersonaDescriptor, PersonaInput, Relationship, Tone};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use sanitize::clamp;
pub use selection::{PersonRef, SpeakerTargetPair};
pub use store::KeyValueStore;

/// Current time as epoch milliseconds, the timestamp unit of stored records.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
