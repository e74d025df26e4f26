pub mod pii;

use lift_core::EntityKind;

use pii::PiiPattern;

/// Unified pattern match result before context scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub kind: EntityKind,
    pub pattern_name: &'static str,
    pub start: usize,
    pub end: usize,
    pub base_confidence: f64,
}

impl RawMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Run every pattern whose kind passes `allow` against the input text,
/// returning raw matches in pattern order. Overlaps are left for the caller.
pub fn scan_all(text: &str, allow: impl Fn(EntityKind) -> bool) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    for pat in pii::all_patterns() {
        if allow(pat.kind) {
            collect_matches(text, &pat, &mut matches);
        }
    }
    matches
}

fn collect_matches(text: &str, pat: &PiiPattern, out: &mut Vec<RawMatch>) {
    let Some(re) = pat.regex.as_ref() else { return };
    let mut push = |start: usize, end: usize| {
        if start < end {
            out.push(RawMatch {
                kind: pat.kind,
                pattern_name: pat.name,
                start,
                end,
                base_confidence: pat.base_confidence,
            });
        }
    };
    match pat.group {
        None => {
            for m in re.find_iter(text) {
                push(m.start(), m.end());
            }
        }
        Some(group) => {
            for caps in re.captures_iter(text) {
                if let Some(m) = caps.get(group) {
                    push(m.start(), m.end());
                }
            }
        }
    }
}
