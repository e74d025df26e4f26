//! Context-aware confidence adjustment for PII pattern matches.
//!
//! Adjusts the base confidence of a detected pattern based on the text just
//! before it. Ordinary course material is full of dates and numbers; a
//! nearby label ("DOB:", "phone") is what separates PII from content.

use lift_core::constants::LABEL_CONTEXT_WINDOW;
use lift_core::EntityKind;

/// Context signals that can adjust pattern confidence.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    /// Whether a label for the match's kind precedes it.
    pub label_nearby: bool,
    /// Base confidence override from configuration.
    pub base_override: Option<f64>,
}

const LABEL_ADJUSTMENT: f64 = 0.10;

/// Adjust the base confidence of a pattern match given the context.
/// Returns `None` if the match falls below `min_confidence`.
pub fn adjust_confidence(
    base_confidence: f64,
    ctx: &ScoringContext,
    min_confidence: f64,
) -> Option<f64> {
    let mut adjusted = ctx.base_override.unwrap_or(base_confidence);

    if ctx.label_nearby {
        adjusted += LABEL_ADJUSTMENT;
    }

    adjusted = adjusted.clamp(0.0, 1.0);

    if adjusted < min_confidence {
        return None;
    }

    Some(adjusted)
}

/// Lower-case labels that mark the following value as `kind`.
pub fn labels_for(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Person => &["name", "student", "dear", "contact"],
        EntityKind::Email => &["email", "e-mail", "mail"],
        EntityKind::Phone => &["phone", "tel", "mobile", "cell", "call"],
        EntityKind::Ssn => &["ssn", "social security"],
        EntityKind::CreditCard => &["card", "visa", "mastercard", "amex"],
        EntityKind::IpAddress => &["ip address", "ip:", "host"],
        EntityKind::Iban => &["iban", "account"],
        EntityKind::DateOfBirth => &["dob", "born", "birth"],
        EntityKind::Address => &["address", "lives at", "resides"],
        EntityKind::StudentId => &["student", "id"],
    }
}

/// Detect if a label for `kind` appears shortly before `match_start`.
pub fn has_label_context(text: &str, match_start: usize, kind: EntityKind) -> bool {
    let prefix_start = floor_char_boundary(text, match_start.saturating_sub(LABEL_CONTEXT_WINDOW));
    let prefix = text[prefix_start..match_start].to_lowercase();
    labels_for(kind).iter().any(|label| prefix.contains(label))
}

/// Largest char boundary `<= index`.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
