//! Storage implementations for twinvoice.
//!
//! Backends implement `twinvoice_core::KeyValueStore`; the
//! `ProfileRepository` layers typed access and the fixed key layout on top.

pub mod file_backend;
pub mod in_memory;
pub mod repository;

pub use file_backend::FileStore;
pub use in_memory::InMemoryStore;
pub use repository::{keys, ProfileRepository};
