//! Typed access to the persisted profile data.
//!
//! Every value lives under a fixed key as serialized JSON. Loads are total:
//! a missing key, an unreadable backend, or malformed JSON all yield the
//! type's default and a `warn!`, never an error. Saves propagate failures.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use twinvoice_core::error::{Error, Result};
use twinvoice_core::{
    clamp, now_millis, Account, AnswerRecord, Connection, CorrectionRecord, KeyValueStore,
    MemoryFact, RecentChat, Relationship, SpeakerTargetPair, Tone,
};

/// Fixed storage keys and retention caps.
pub mod keys {
    pub const ANSWERS: &str = "personality_answers_v1";
    pub const ACCOUNT: &str = "persona_v1";
    pub const CONNECTIONS: &str = "connections_v1";
    pub const SELECTION_PREFIX: &str = "speaker_target_v1";
    pub const CORRECTIONS: &str = "corrections_v1";
    pub const MEMORY_FACTS: &str = "memory_facts_v1";
    pub const RECENT_CHATS: &str = "recent_chats_v1";

    pub const DEFAULT_SESSION: &str = "default";

    pub const CORRECTIONS_CAP: usize = 50;
    pub const MEMORY_FACTS_CAP: usize = 200;
    pub const RECENT_CHATS_CAP: usize = 5;
    pub const FACT_MAX_CHARS: usize = 240;
    pub const TAG_MAX_CHARS: usize = 40;

    /// Session name as stored: trimmed, with characters outside
    /// `[A-Za-z0-9_-]` replaced by `_`. A blank session maps to the default.
    pub fn session_id(session: &str) -> String {
        let session = session.trim();
        if session.is_empty() {
            return DEFAULT_SESSION.to_string();
        }
        session
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '-') { c } else { '_' })
            .collect()
    }

    /// Per-session speaker/target key.
    pub fn selection(session: &str) -> String {
        format!("{SELECTION_PREFIX}.{}", session_id(session))
    }
}

/// Typed repository over any `KeyValueStore`.
pub struct ProfileRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Malformed stored JSON, using default");
                T::default()
            }
        }
    }

    /// Load a JSON array element by element. Elements that fail to decode
    /// are dropped with a `warn!`; the rest survive.
    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw: Vec<serde_json::Value> = self.load(key);
        let total = raw.len();
        let items: Vec<T> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key, index, error = %e, "Dropping malformed stored element");
                    None
                }
            })
            .collect();
        if items.len() < total {
            debug!(key, kept = items.len(), total, "Loaded list with dropped elements");
        }
        items
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        Ok(())
    }

    // ── Interview answers ─────────────────────────────────────────────

    pub fn load_answers(&self) -> AnswerRecord {
        self.load(keys::ANSWERS)
    }

    pub fn save_answers(&self, answers: &AnswerRecord) -> Result<()> {
        self.save(keys::ANSWERS, answers)
    }

    /// Set one answer; a blank value removes the identifier.
    pub fn set_answer(&self, id: &str, value: &str) -> Result<AnswerRecord> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::MissingInput("field identifier".into()));
        }
        let mut answers = self.load_answers();
        answers.set(id, value);
        self.save_answers(&answers)?;
        Ok(answers)
    }

    pub fn clear_answers(&self) -> Result<()> {
        Ok(self.store.remove(keys::ANSWERS)?)
    }

    // ── Account ───────────────────────────────────────────────────────

    pub fn load_account(&self) -> Option<Account> {
        self.load(keys::ACCOUNT)
    }

    /// Save the account. The name is required; name and bio are trimmed.
    pub fn save_account(&self, name: &str, bio: Option<&str>, tone: Tone) -> Result<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingInput("display name".into()));
        }
        let account = Account {
            display_name: name.to_string(),
            bio: bio.map(str::trim).filter(|b| !b.is_empty()).map(String::from),
            tone,
        };
        self.save(keys::ACCOUNT, &account)?;
        Ok(account)
    }

    // ── Connections ───────────────────────────────────────────────────

    pub fn load_connections(&self) -> Vec<Connection> {
        self.load_list(keys::CONNECTIONS)
    }

    pub fn add_connection(
        &self,
        name: &str,
        role: Relationship,
        invite_code: Option<&str>,
    ) -> Result<Connection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingInput("connection name".into()));
        }
        let connection = Connection {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            role,
            invite_code: invite_code
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty()),
            created_at: now_millis(),
        };
        let mut connections = self.load_connections();
        connections.push(connection.clone());
        self.save(keys::CONNECTIONS, &connections)?;
        Ok(connection)
    }

    /// Returns whether a connection was removed.
    pub fn remove_connection(&self, id: &str) -> Result<bool> {
        let mut connections = self.load_connections();
        let before = connections.len();
        connections.retain(|c| c.id != id);
        if connections.len() == before {
            return Ok(false);
        }
        self.save(keys::CONNECTIONS, &connections)?;
        Ok(true)
    }

    // ── Speaker / target selection ────────────────────────────────────

    pub fn load_selection(&self, session: &str) -> SpeakerTargetPair {
        self.load(&keys::selection(session))
    }

    pub fn save_selection(&self, session: &str, pair: &SpeakerTargetPair) -> Result<()> {
        self.save(&keys::selection(session), pair)
    }

    // ── Corrections ───────────────────────────────────────────────────

    /// Correction history, newest first.
    pub fn load_corrections(&self) -> Vec<CorrectionRecord> {
        self.load_list(keys::CORRECTIONS)
    }

    /// Prepend a correction, keeping at most `CORRECTIONS_CAP` entries.
    pub fn add_correction(&self, record: CorrectionRecord) -> Result<()> {
        let mut corrections = self.load_corrections();
        corrections.insert(0, record);
        corrections.truncate(keys::CORRECTIONS_CAP);
        debug!(count = corrections.len(), "Saving corrections");
        self.save(keys::CORRECTIONS, &corrections)
    }

    pub fn clear_corrections(&self) -> Result<()> {
        Ok(self.store.remove(keys::CORRECTIONS)?)
    }

    // ── Memory facts ──────────────────────────────────────────────────

    /// Memory facts sorted newest first.
    pub fn load_memory_facts(&self) -> Vec<MemoryFact> {
        let mut facts: Vec<MemoryFact> = self.load_list(keys::MEMORY_FACTS);
        facts.retain(|f| !f.fact.trim().is_empty());
        facts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        facts
    }

    fn save_memory_facts(&self, facts: &[MemoryFact]) -> Result<()> {
        let capped = &facts[..facts.len().min(keys::MEMORY_FACTS_CAP)];
        self.save(keys::MEMORY_FACTS, capped)
    }

    fn clean_tag(tag: Option<&str>) -> Option<String> {
        let tag = clamp(tag, keys::TAG_MAX_CHARS);
        (!tag.is_empty()).then_some(tag)
    }

    pub fn add_memory_fact(&self, fact: &str, tag: Option<&str>) -> Result<MemoryFact> {
        let fact = clamp(fact, keys::FACT_MAX_CHARS);
        if fact.is_empty() {
            return Err(Error::MissingInput("memory fact".into()));
        }
        let item = MemoryFact {
            id: uuid::Uuid::new_v4().to_string(),
            fact,
            tag: Self::clean_tag(tag),
            created_at: now_millis(),
            updated_at: None,
        };
        let mut facts = self.load_memory_facts();
        facts.insert(0, item.clone());
        self.save_memory_facts(&facts)?;
        Ok(item)
    }

    /// Update the text and/or tag of a fact. A blank fact text keeps the
    /// previous text; a blank tag clears the tag.
    pub fn update_memory_fact(
        &self,
        id: &str,
        fact: Option<&str>,
        tag: Option<&str>,
    ) -> Result<bool> {
        let mut facts = self.load_memory_facts();
        let Some(item) = facts.iter_mut().find(|f| f.id == id) else {
            return Ok(false);
        };
        if let Some(fact) = fact {
            let fact = clamp(fact, keys::FACT_MAX_CHARS);
            if !fact.is_empty() {
                item.fact = fact;
            }
        }
        if tag.is_some() {
            item.tag = Self::clean_tag(tag);
        }
        item.updated_at = Some(now_millis());
        self.save_memory_facts(&facts)?;
        Ok(true)
    }

    pub fn delete_memory_fact(&self, id: &str) -> Result<bool> {
        let mut facts = self.load_memory_facts();
        let before = facts.len();
        facts.retain(|f| f.id != id);
        if facts.len() == before {
            return Ok(false);
        }
        self.save_memory_facts(&facts)?;
        Ok(true)
    }

    pub fn clear_memory_facts(&self) -> Result<()> {
        Ok(self.store.remove(keys::MEMORY_FACTS)?)
    }

    // ── Recent chats ──────────────────────────────────────────────────

    pub fn load_recent_chats(&self) -> Vec<RecentChat> {
        self.load_list(keys::RECENT_CHATS)
    }

    pub fn add_recent_chat(&self, chat: RecentChat) -> Result<()> {
        let mut chats = self.load_recent_chats();
        chats.insert(0, chat);
        chats.truncate(keys::RECENT_CHATS_CAP);
        self.save(keys::RECENT_CHATS, &chats)
    }
}
