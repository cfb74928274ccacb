//! Resolution of one logical question across aliased identifiers.

use twinvoice_core::AnswerRecord;

/// Trimmed value of the first candidate with a non-empty answer, or `""`.
///
/// Candidates are ordered most-preferred first, so current identifiers
/// shadow legacy ones while legacy data still fills unanswered slots.
pub fn resolve<'a>(record: &'a AnswerRecord, candidates: &[&str]) -> &'a str {
    resolve_with_source(record, candidates).map_or("", |(_, value)| value)
}

/// Like [`resolve`], but also reports which candidate supplied the value.
pub fn resolve_with_source<'a, 'c>(
    record: &'a AnswerRecord,
    candidates: &[&'c str],
) -> Option<(&'c str, &'a str)> {
    candidates.iter().find_map(|&id| {
        let value = record.trimmed(id);
        (!value.is_empty()).then_some((id, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_identifier_wins() {
        let record: AnswerRecord = [("identity_words", "calm, direct"), ("identity_1", "kind")]
            .into_iter()
            .collect();
        assert_eq!(resolve(&record, &["identity_words", "identity_1"]), "calm, direct");
    }

    #[test]
    fn legacy_fills_blank_current() {
        let record: AnswerRecord = [("identity_words", "   "), ("identity_1", " kind ")]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_with_source(&record, &["identity_words", "identity_1"]),
            Some(("identity_1", "kind"))
        );
    }

    #[test]
    fn nothing_matches() {
        let record = AnswerRecord::new();
        assert_eq!(resolve(&record, &["a", "b"]), "");
        assert_eq!(resolve(&record, &[]), "");
    }
}
