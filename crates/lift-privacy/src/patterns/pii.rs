use lift_core::EntityKind;
use regex::Regex;
use std::sync::LazyLock;

/// A compiled PII detection pattern.
pub struct PiiPattern {
    pub name: &'static str,
    pub kind: EntityKind,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Capture group holding the sensitive value; `None` uses the whole match.
    pub group: Option<usize>,
    pub base_confidence: f64,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Person names (after an honorific or a name label) ─────────────────────
pii_pattern!(
    RE_PERSON_HONORIFIC,
    r"\b(?:Mr|Mrs|Ms|Mx|Miss|Dr|Prof|Professor)\.?[ \t]+([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?(?:[ \t]+[A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)?)"
);
pii_pattern!(
    RE_PERSON_LABELED,
    r"\b(?:[Nn]ame|[Ss]tudent|[Cc]ontact|[Aa]uthor|[Ii]nstructor|[Pp]arent)[ \t]*:[ \t]*([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?(?:[ \t]+[A-Z][a-z]+(?:[-'][A-Z][a-z]+)?){0,2})"
);

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// ── Phone numbers (North American + international) ────────────────────────
pii_pattern!(
    RE_PHONE,
    r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b"
);
pii_pattern!(
    RE_PHONE_INTL,
    r"\+\d{1,3}[-.\s]\d{1,4}(?:[-.\s]\d{2,4}){2,4}\b"
);

// ── SSN ────────────────────────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Credit card (Visa, MC, Amex, Discover) ─────────────────────────────────
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b(?:4\d{3}|5[1-5]\d{2}|3[47]\d{2}|6(?:011|5\d{2}))[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{3,4}\b"
);

// ── IP addresses ───────────────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);
pii_pattern!(RE_IPV6, r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b");

// ── IBAN ───────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IBAN,
    r"\b[A-Z]{2}\d{2}[A-Z0-9]{4}\d{7}(?:[A-Z0-9]?\d{0,16})\b"
);

// ── Dates (only redacted when a birth label is nearby) ────────────────────
pii_pattern!(
    RE_DATE_US,
    r"\b(?:0[1-9]|1[0-2])[/\-](?:0[1-9]|[12]\d|3[01])[/\-](?:19|20)\d{2}\b"
);
pii_pattern!(
    RE_DATE_ISO,
    r"\b(?:19|20)\d{2}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])\b"
);

// ── Physical address (US-style street address) ────────────────────────────
pii_pattern!(
    RE_ADDRESS,
    r"\b\d{1,5}\s+(?:[A-Z][a-z]+\s?){1,4}(?:St|Street|Ave|Avenue|Blvd|Boulevard|Dr|Drive|Ln|Lane|Rd|Road|Ct|Court|Pl|Place|Way)\b"
);

// ── Student / employee ID after a label ───────────────────────────────────
pii_pattern!(
    RE_STUDENT_ID,
    r"\b(?i:student|learner|employee)[ \t]*(?i:id|number|no\.?|#)[ \t]*[:#]?[ \t]*([A-Za-z]?\d{5,10})\b"
);

/// All PII patterns, most specific first.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "email",
            kind: EntityKind::Email,
            regex: &RE_EMAIL,
            group: None,
            base_confidence: 0.95,
        },
        PiiPattern {
            name: "ssn",
            kind: EntityKind::Ssn,
            regex: &RE_SSN,
            group: None,
            base_confidence: 0.95,
        },
        PiiPattern {
            name: "credit_card",
            kind: EntityKind::CreditCard,
            regex: &RE_CREDIT_CARD,
            group: None,
            base_confidence: 0.90,
        },
        PiiPattern {
            name: "student_id",
            kind: EntityKind::StudentId,
            regex: &RE_STUDENT_ID,
            group: Some(1),
            base_confidence: 0.85,
        },
        PiiPattern {
            name: "iban",
            kind: EntityKind::Iban,
            regex: &RE_IBAN,
            group: None,
            base_confidence: 0.85,
        },
        PiiPattern {
            name: "phone",
            kind: EntityKind::Phone,
            regex: &RE_PHONE,
            group: None,
            base_confidence: 0.80,
        },
        PiiPattern {
            name: "phone_intl",
            kind: EntityKind::Phone,
            regex: &RE_PHONE_INTL,
            group: None,
            base_confidence: 0.75,
        },
        PiiPattern {
            name: "ipv6",
            kind: EntityKind::IpAddress,
            regex: &RE_IPV6,
            group: None,
            base_confidence: 0.75,
        },
        PiiPattern {
            name: "ipv4",
            kind: EntityKind::IpAddress,
            regex: &RE_IPV4,
            group: None,
            base_confidence: 0.70,
        },
        PiiPattern {
            name: "person_honorific",
            kind: EntityKind::Person,
            regex: &RE_PERSON_HONORIFIC,
            group: Some(1),
            base_confidence: 0.70,
        },
        PiiPattern {
            name: "person_labeled",
            kind: EntityKind::Person,
            regex: &RE_PERSON_LABELED,
            group: Some(1),
            base_confidence: 0.65,
        },
        PiiPattern {
            name: "address",
            kind: EntityKind::Address,
            regex: &RE_ADDRESS,
            group: None,
            base_confidence: 0.65,
        },
        PiiPattern {
            name: "date_us",
            kind: EntityKind::DateOfBirth,
            regex: &RE_DATE_US,
            group: None,
            base_confidence: 0.35,
        },
        PiiPattern {
            name: "date_iso",
            kind: EntityKind::DateOfBirth,
            regex: &RE_DATE_ISO,
            group: None,
            base_confidence: 0.35,
        },
    ]
}
