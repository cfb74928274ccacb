//! Persona and speaker/target resolution.
//!
//! References to connections that no longer exist fall back to the account
//! holder. That is not an error: the caller gets `degraded = true` and the
//! corrected pair, and decides whether to persist it.

use tracing::debug;
use twinvoice_core::{
    clamp, Account, Connection, PersonRef, PersonaDescriptor, PersonaInput, Relationship,
    SpeakerTargetPair,
};

/// Label for the account holder when no display name is set.
pub const SELF_LABEL: &str = "Me";

const NAME_BUDGET: usize = 80;
const DESCRIPTION_BUDGET: usize = 320;
const FREE_TEXT_BUDGET: usize = 600;

fn find<'a>(connections: &'a [Connection], reference: &PersonRef) -> Option<&'a Connection> {
    match reference {
        PersonRef::Myself => None,
        PersonRef::Connection(id) => connections.iter().find(|c| &c.id == id),
    }
}

fn self_name(account: Option<&Account>) -> String {
    account
        .and_then(Account::name)
        .map_or_else(|| SELF_LABEL.to_string(), |name| clamp(name, NAME_BUDGET))
}

fn connection_label(connection: &Connection) -> String {
    let name = clamp(connection.name.as_str(), NAME_BUDGET);
    let name = if name.is_empty() { "Unnamed connection".to_string() } else { name };
    format!("{name} ({})", connection.role)
}

/// Descriptor for the identity the model voices.
///
/// The account holder carries their tone and bio; a connection carries its
/// name and role with the default tone. Unknown references resolve to self.
pub fn resolve_persona(
    account: Option<&Account>,
    connections: &[Connection],
    reference: &PersonRef,
) -> PersonaDescriptor {
    if let Some(connection) = find(connections, reference) {
        return PersonaDescriptor {
            name: clamp(connection.name.as_str(), NAME_BUDGET),
            relationship: connection.role,
            tone: Default::default(),
            description: String::new(),
        };
    }
    PersonaDescriptor {
        name: self_name(account),
        relationship: Relationship::Myself,
        tone: account.map(|a| a.tone).unwrap_or_default(),
        description: clamp(account.and_then(|a| a.bio.as_deref()), DESCRIPTION_BUDGET),
    }
}

/// Resolved display labels for a speaker/target pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerTarget {
    pub speaker_label: String,
    pub target_label: String,
    /// The pair after dangling references were replaced with self.
    pub pair: SpeakerTargetPair,
    /// Whether any reference had to be replaced.
    pub degraded: bool,
}

impl SpeakerTarget {
    /// Whether either side is a (still existing) connection.
    pub fn involves_connection(&self) -> bool {
        !self.pair.speaker.is_self() || !self.pair.target.is_self()
    }

    /// `"Speaker: …\nTarget: …"`, as recorded with each answer.
    pub fn summary(&self) -> String {
        format!("Speaker: {}\nTarget: {}", self.speaker_label, self.target_label)
    }

    /// Speaker/target instructions, only when a connection is involved.
    pub fn rule_block(&self) -> Option<String> {
        if !self.involves_connection() {
            return None;
        }
        Some(
            [
                "SPEAKER / TARGET:".to_string(),
                format!("Speaker: {}", self.speaker_label),
                format!("Target: {}", self.target_label),
                "- Answer in first person as the Speaker.".to_string(),
                "- When the Target is someone other than the Speaker, you may express the Speaker's opinions about the Target.".to_string(),
                "- Never claim to be the real Speaker. You are an AI representation.".to_string(),
            ]
            .join("\n"),
        )
    }
}

pub fn resolve_speaker_target(
    account: Option<&Account>,
    connections: &[Connection],
    pair: &SpeakerTargetPair,
) -> SpeakerTarget {
    let mut degraded = false;
    let mut side = |reference: &PersonRef, role: &str| -> (PersonRef, String) {
        match reference {
            PersonRef::Myself => (PersonRef::Myself, self_name(account)),
            PersonRef::Connection(id) => match find(connections, reference) {
                Some(connection) => (reference.clone(), connection_label(connection)),
                None => {
                    debug!(role, id = %id, "Connection no longer exists, using self");
                    degraded = true;
                    (PersonRef::Myself, self_name(account))
                }
            },
        }
    };
    let (speaker, speaker_label) = side(&pair.speaker, "speaker");
    let (target, target_label) = side(&pair.target, "target");
    SpeakerTarget {
        speaker_label,
        target_label,
        pair: SpeakerTargetPair { speaker, target },
        degraded,
    }
}

/// The persona identity block. Always present; absent input yields a
/// neutral placeholder.
pub fn persona_block(input: &PersonaInput) -> String {
    let mut lines = vec!["PERSONA:".to_string()];
    match input {
        PersonaInput::Structured(persona) => {
            let name = clamp(persona.name.as_str(), NAME_BUDGET);
            lines.push(format!(
                "Name: {}",
                if name.is_empty() { SELF_LABEL } else { name.as_str() }
            ));
            lines.push(format!("Relationship: {}", persona.relationship));
            lines.push(format!("Tone: {} ({})", persona.tone, persona.tone.help()));
            let description = clamp(persona.description.as_str(), DESCRIPTION_BUDGET);
            if !description.is_empty() {
                lines.push(format!("Description: {description}"));
            }
        }
        PersonaInput::FreeText(text) => lines.push(clamp(text.as_str(), FREE_TEXT_BUDGET)),
        PersonaInput::Absent => lines.push(
            "(No persona provided. Speak as a neutral representation of the user.)".to_string(),
        ),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinvoice_core::Tone;

    fn account(name: &str) -> Account {
        Account {
            display_name: name.into(),
            bio: Some("  Nurse, mum of two  ".into()),
            tone: Tone::Direct,
        }
    }

    fn dad() -> Connection {
        Connection {
            id: "c-dad".into(),
            name: "Dad".into(),
            role: Relationship::Father,
            invite_code: None,
            created_at: 0,
        }
    }

    #[test]
    fn missing_connection_degrades_to_me() {
        let pair = SpeakerTargetPair::new("c-gone", "self");
        let resolved = resolve_speaker_target(None, &[], &pair);
        assert_eq!(resolved.speaker_label, "Me");
        assert_eq!(resolved.target_label, "Me");
        assert!(resolved.degraded);
        assert_eq!(resolved.pair, SpeakerTargetPair::default());
        assert!(resolved.rule_block().is_none());
    }

    #[test]
    fn self_uses_account_name() {
        let acct = account("  Ana ");
        let resolved =
            resolve_speaker_target(Some(&acct), &[dad()], &SpeakerTargetPair::new("self", "c-dad"));
        assert_eq!(resolved.speaker_label, "Ana");
        assert_eq!(resolved.target_label, "Dad (Father)");
        assert!(!resolved.degraded);
        assert_eq!(resolved.summary(), "Speaker: Ana\nTarget: Dad (Father)");
    }

    #[test]
    fn rule_block_only_with_connections() {
        let plain = resolve_speaker_target(None, &[dad()], &SpeakerTargetPair::default());
        assert!(plain.rule_block().is_none());

        let with_dad =
            resolve_speaker_target(None, &[dad()], &SpeakerTargetPair::new("c-dad", "self"));
        let block = with_dad.rule_block().unwrap();
        assert!(block.starts_with("SPEAKER / TARGET:\nSpeaker: Dad (Father)\nTarget: Me"));
        assert!(block.contains("first person as the Speaker"));
        assert!(block.contains("Never claim to be the real Speaker"));
    }

    #[test]
    fn persona_for_self_and_connection() {
        let acct = account("Ana");
        let me = resolve_persona(Some(&acct), &[dad()], &PersonRef::Myself);
        assert_eq!(me.name, "Ana");
        assert_eq!(me.relationship, Relationship::Myself);
        assert_eq!(me.tone, Tone::Direct);
        assert_eq!(me.description, "Nurse, mum of two");

        let father = resolve_persona(Some(&acct), &[dad()], &PersonRef::connection("c-dad"));
        assert_eq!(father.name, "Dad");
        assert_eq!(father.relationship, Relationship::Father);
        assert_eq!(father.tone, Tone::Warm);

        let fallback = resolve_persona(None, &[], &PersonRef::connection("c-gone"));
        assert_eq!(fallback.name, "Me");
        assert_eq!(fallback.relationship, Relationship::Myself);
    }

    #[test]
    fn persona_block_shapes() {
        let descriptor = PersonaDescriptor {
            name: "Ana".into(),
            relationship: Relationship::Myself,
            tone: Tone::Calm,
            description: String::new(),
        };
        assert_eq!(
            persona_block(&descriptor.into()),
            "PERSONA:\nName: Ana\nRelationship: Self\nTone: Calm (Steady, reassuring, no drama.)"
        );
        assert_eq!(
            persona_block(&PersonaInput::FreeText("A patient teacher".into())),
            "PERSONA:\nA patient teacher"
        );
        assert!(persona_block(&PersonaInput::Absent).contains("No persona provided"));
    }
}
