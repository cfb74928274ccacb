//! Memory facts block.

use twinvoice_core::{clamp, MemoryFact};
use twinvoice_store::keys::{FACT_MAX_CHARS, TAG_MAX_CHARS};

const HEADER: &str = "MEMORY FACTS (always treat these as true for this persona):";

/// Render up to `limit` facts (expected newest first). `None` when there
/// are no non-blank facts.
pub fn memory_facts_block(facts: &[MemoryFact], limit: usize) -> Option<String> {
    let lines: Vec<String> = facts
        .iter()
        .filter_map(|f| {
            let fact = clamp(f.fact.as_str(), FACT_MAX_CHARS);
            if fact.is_empty() {
                return None;
            }
            let tag = clamp(f.tag.as_deref(), TAG_MAX_CHARS);
            Some(if tag.is_empty() {
                format!("- {fact}")
            } else {
                format!("- [{tag}] {fact}")
            })
        })
        .take(limit)
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(std::iter::once(HEADER.to_string()).chain(lines).collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(text: &str, tag: Option<&str>) -> MemoryFact {
        MemoryFact {
            fact: text.into(),
            tag: tag.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn renders_tagged_and_plain() {
        let facts = vec![fact("Allergic to peanuts", Some("Health")), fact("Lives in Porto", Some(" "))];
        assert_eq!(
            memory_facts_block(&facts, 20).unwrap(),
            "MEMORY FACTS (always treat these as true for this persona):\n\
             - [Health] Allergic to peanuts\n\
             - Lives in Porto"
        );
    }

    #[test]
    fn oversized_facts_and_tags_are_clamped_to_stored_limits() {
        let long_fact = "f".repeat(FACT_MAX_CHARS + 60);
        let long_tag = "t".repeat(TAG_MAX_CHARS + 9);
        let facts = vec![fact(&long_fact, Some(long_tag.as_str()))];
        let block = memory_facts_block(&facts, 5).unwrap();
        let line = block.lines().nth(1).unwrap();
        let expected = format!("- [{}] {}", "t".repeat(TAG_MAX_CHARS), "f".repeat(FACT_MAX_CHARS));
        assert_eq!(line, expected);
    }

    #[test]
    fn respects_limit_and_skips_blank() {
        let facts = vec![fact(" ", None), fact("one", None), fact("two", None), fact("three", None)];
        let block = memory_facts_block(&facts, 2).unwrap();
        assert!(block.ends_with("- one\n- two"));
        assert!(memory_facts_block(&[fact("  ", None)], 5).is_none());
        assert!(memory_facts_block(&facts, 0).is_none());
    }
}
