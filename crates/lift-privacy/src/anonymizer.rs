use std::collections::HashMap;

use aho_corasick::AhoCorasick;
use lift_core::constants::MIN_LEAK_CHECK_BYTES;
use lift_core::errors::ScrubbingError;
use lift_core::models::{Redaction, SanitizedText};
use lift_core::traits::IAnonymizer;
use lift_core::{DetectedEntity, EntityKind};

/// Replaces detected spans with `[KIND_n]` placeholders.
///
/// `n` numbers the distinct values of a kind in order of first appearance;
/// repeats of the same value share a placeholder. The value-to-placeholder
/// table lives only for the duration of one call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Anonymizer;

impl Anonymizer {
    pub fn new() -> Self {
        Self
    }
}

impl IAnonymizer for Anonymizer {
    fn anonymize(
        &self,
        text: &str,
        entities: &[DetectedEntity],
    ) -> Result<SanitizedText, ScrubbingError> {
        let mut spans: Vec<&DetectedEntity> = entities.iter().collect();
        spans.sort_by_key(|e| e.start);
        validate_spans(text, &spans)?;

        let mut counters: HashMap<EntityKind, usize> = HashMap::new();
        let mut assigned: HashMap<(EntityKind, &str), String> = HashMap::new();
        let mut leak_checked: Vec<(EntityKind, &str)> = Vec::new();
        let mut output = String::with_capacity(text.len());
        let mut redactions = Vec::with_capacity(spans.len());
        let mut cursor = 0;

        // Single left-to-right pass: copy the gap, then the placeholder.
        for span in &spans {
            output.push_str(&text[cursor..span.start]);
            let value = &text[span.start..span.end];
            let placeholder = assigned
                .entry((span.kind, value))
                .or_insert_with(|| {
                    if value.len() >= MIN_LEAK_CHECK_BYTES {
                        leak_checked.push((span.kind, value));
                    }
                    let n = counters.entry(span.kind).or_insert(0);
                    *n += 1;
                    format!("[{}_{}]", span.kind.tag(), n)
                })
                .clone();
            output.push_str(&placeholder);
            redactions.push(Redaction {
                kind: span.kind,
                placeholder,
                start: span.start,
                end: span.end,
                confidence: span.confidence,
            });
            cursor = span.end;
        }
        output.push_str(&text[cursor..]);

        check_residual(&output, &leak_checked)?;

        Ok(SanitizedText {
            text: output,
            redactions,
        })
    }
}

/// Fail if any redacted value still appears verbatim in `output`. All values
/// are searched for in one pass.
fn check_residual(output: &str, values: &[(EntityKind, &str)]) -> Result<(), ScrubbingError> {
    if values.is_empty() {
        return Ok(());
    }
    let automaton = AhoCorasick::new(values.iter().map(|(_, value)| *value)).map_err(|e| {
        ScrubbingError::LeakCheckUnavailable {
            reason: e.to_string(),
        }
    })?;
    match automaton.find(output) {
        Some(m) => Err(ScrubbingError::ResidualPii {
            kind: values[m.pattern().as_usize()].0.to_string(),
        }),
        None => Ok(()),
    }
}

/// Spans must be non-empty, in bounds, char-aligned and pairwise disjoint.
/// `spans` must already be sorted by start.
fn validate_spans(text: &str, spans: &[&DetectedEntity]) -> Result<(), ScrubbingError> {
    let mut previous_end = 0;
    for span in spans {
        if span.start >= span.end
            || span.end > text.len()
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            return Err(ScrubbingError::InvalidSpan {
                start: span.start,
                end: span.end,
                len: text.len(),
            });
        }
        if span.start < previous_end {
            return Err(ScrubbingError::OverlappingSpans { at: span.start });
        }
        previous_end = span.end;
    }
    Ok(())
}
