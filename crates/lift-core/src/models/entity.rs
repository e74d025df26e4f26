use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categories of personally identifiable information the detector reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Person,
    Email,
    Phone,
    Ssn,
    CreditCard,
    IpAddress,
    Iban,
    DateOfBirth,
    Address,
    StudentId,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Person,
        EntityKind::Email,
        EntityKind::Phone,
        EntityKind::Ssn,
        EntityKind::CreditCard,
        EntityKind::IpAddress,
        EntityKind::Iban,
        EntityKind::DateOfBirth,
        EntityKind::Address,
        EntityKind::StudentId,
    ];

    /// Upper-case tag used in placeholders and config keys.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Ssn => "SSN",
            Self::CreditCard => "CREDIT_CARD",
            Self::IpAddress => "IP_ADDRESS",
            Self::Iban => "IBAN",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::Address => "ADDRESS",
            Self::StudentId => "STUDENT_ID",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|k| k.tag() == wanted)
            .ok_or_else(|| format!("unknown entity kind: {s}"))
    }
}

/// A span of suspected PII within one scanned text.
///
/// Offsets are UTF-8 byte offsets on char boundaries, `start < end <= len`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    pub kind: EntityKind,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}

impl DetectedEntity {
    pub fn new(kind: EntityKind, start: usize, end: usize, confidence: f64) -> Self {
        Self {
            kind,
            start,
            end,
            confidence,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Half-open interval overlap.
    pub fn overlaps(&self, other: &DetectedEntity) -> bool {
        self.start < other.end && other.start < self.end
    }
}
