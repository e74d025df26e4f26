use std::collections::{BTreeMap, HashSet};

use aho_corasick::AhoCorasick;
use lift_core::config::PrivacyConfig;
use lift_core::constants::MIN_LEAK_CHECK_BYTES;
use lift_core::errors::ScrubbingError;
use lift_core::traits::IEntityDetector;
use lift_core::{DetectedEntity, EntityKind};
use tracing::{debug, warn};

use crate::context_scoring::{adjust_confidence, has_label_context, ScoringContext};
use crate::patterns::{self, RawMatch};

/// An enabled pattern that failed to compile. Detection refuses to run
/// while any exist, since the pattern's kind would pass through unredacted.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFailure {
    pub pattern_name: &'static str,
    pub kind: EntityKind,
}

/// Regex-based PII detector with an entity-kind allow-list.
///
/// Detection is pure: the same text and configuration always produce the
/// same entities. Output spans never overlap and are sorted by start offset.
pub struct EntityDetector {
    config: PrivacyConfig,
}

impl EntityDetector {
    pub fn new(config: PrivacyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrivacyConfig {
        &self.config
    }

    /// Enabled patterns that failed to compile.
    pub fn pattern_health(&self) -> Vec<PatternFailure> {
        patterns::pii::all_patterns()
            .into_iter()
            .filter(|pat| self.config.allows(pat.kind) && pat.regex.is_none())
            .map(|pat| PatternFailure {
                pattern_name: pat.name,
                kind: pat.kind,
            })
            .collect()
    }

    fn score(&self, text: &str, raw: Vec<RawMatch>) -> Vec<DetectedEntity> {
        raw.into_iter()
            .filter_map(|m| {
                let ctx = ScoringContext {
                    label_nearby: self.config.context_scoring
                        && has_label_context(text, m.start, m.kind),
                    base_override: self.config.confidence_overrides.get(m.kind.tag()).copied(),
                };
                adjust_confidence(m.base_confidence, &ctx, self.config.min_confidence)
                    .map(|confidence| DetectedEntity::new(m.kind, m.start, m.end, confidence))
            })
            .collect()
    }
}

impl Default for EntityDetector {
    fn default() -> Self {
        Self::new(PrivacyConfig::default())
    }
}

impl IEntityDetector for EntityDetector {
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>, ScrubbingError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let failures = self.pattern_health();
        if let Some(failure) = failures.first() {
            warn!(
                failed_patterns = failures.len(),
                pattern = failure.pattern_name,
                "refusing to detect with unavailable patterns"
            );
            return Err(ScrubbingError::PatternUnavailable {
                kind: failure.kind.to_string(),
                pattern: failure.pattern_name.to_string(),
            });
        }

        let raw = patterns::scan_all(text, |kind| self.config.allows(kind));
        let candidates = self.score(text, raw);
        let mut entities = resolve_overlaps(candidates);
        propagate_repeated_values(text, &mut entities)?;

        debug!(entities = entities.len(), "detection pass complete");
        Ok(entities)
    }
}

/// Keep the strongest of any overlapping candidates.
///
/// Ranking: higher confidence, then longer span, then lower start offset.
/// Candidates are accepted greedily in rank order when they overlap nothing
/// already accepted. The result is sorted by start offset.
pub fn resolve_overlaps(mut candidates: Vec<DetectedEntity>) -> Vec<DetectedEntity> {
    candidates.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.kind.cmp(&b.kind))
    });

    let mut index = SpanIndex::default();
    let mut accepted: Vec<DetectedEntity> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if index.try_insert(candidate.start, candidate.end) {
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|e| e.start);
    accepted
}

/// Report every other verbatim occurrence of an accepted value as well, so
/// that a value caught once is redacted everywhere it appears.
///
/// All values are searched for in one pass over the text.
fn propagate_repeated_values(
    text: &str,
    entities: &mut Vec<DetectedEntity>,
) -> Result<(), ScrubbingError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values: Vec<&str> = Vec::new();
    let mut sources: Vec<(EntityKind, f64)> = Vec::new();
    for entity in entities.iter() {
        let value = &text[entity.start..entity.end];
        if value.len() >= MIN_LEAK_CHECK_BYTES && seen.insert(value) {
            values.push(value);
            sources.push((entity.kind, entity.confidence));
        }
    }
    if values.is_empty() {
        return Ok(());
    }

    let automaton = AhoCorasick::new(&values).map_err(|e| ScrubbingError::DetectorFailed {
        reason: format!("repeated-value search unavailable: {e}"),
    })?;

    let mut index = SpanIndex::default();
    for entity in entities.iter() {
        index.try_insert(entity.start, entity.end);
    }
    for m in automaton.find_overlapping_iter(text) {
        if index.try_insert(m.start(), m.end()) {
            let (kind, confidence) = sources[m.pattern().as_usize()];
            entities.push(DetectedEntity::new(kind, m.start(), m.end(), confidence));
        }
    }

    entities.sort_by_key(|e| e.start);
    Ok(())
}

/// Disjoint spans keyed by start offset.
#[derive(Debug, Default)]
struct SpanIndex(BTreeMap<usize, usize>);

impl SpanIndex {
    /// Insert `start..end` unless it overlaps a held span. Since held spans
    /// are disjoint, only the last one starting before `end` can overlap.
    fn try_insert(&mut self, start: usize, end: usize) -> bool {
        let overlaps = self
            .0
            .range(..end)
            .next_back()
            .is_some_and(|(_, &held_end)| held_end > start);
        if !overlaps {
            self.0.insert(start, end);
        }
        !overlaps
    }
}
