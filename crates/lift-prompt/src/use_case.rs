use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of generation intents a request may select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    #[default]
    General,
    CourseDesign,
    AssessmentBuilder,
    FeedbackDrafting,
    LectureSummary,
    AccessibilityReview,
}

impl UseCase {
    pub const ALL: [UseCase; 6] = [
        UseCase::General,
        UseCase::CourseDesign,
        UseCase::AssessmentBuilder,
        UseCase::FeedbackDrafting,
        UseCase::LectureSummary,
        UseCase::AccessibilityReview,
    ];

    /// Resolve a selector key. Unknown keys fall back to `General`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Self::General,
            "uc1" => Self::CourseDesign,
            "uc2" => Self::AssessmentBuilder,
            "uc3" => Self::FeedbackDrafting,
            "uc4" => Self::LectureSummary,
            "uc5" => Self::AccessibilityReview,
            _ => Self::General,
        }
    }

    /// Canonical selector key.
    pub fn key(self) -> &'static str {
        match self {
            Self::General => "none",
            Self::CourseDesign => "uc1",
            Self::AssessmentBuilder => "uc2",
            Self::FeedbackDrafting => "uc3",
            Self::LectureSummary => "uc4",
            Self::AccessibilityReview => "uc5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Support",
            Self::CourseDesign => "Course Design",
            Self::AssessmentBuilder => "Assessment Builder",
            Self::FeedbackDrafting => "Feedback Drafting",
            Self::LectureSummary => "Lecture Summary",
            Self::AccessibilityReview => "Accessibility Review",
        }
    }

    /// Short instruction framing the request's intent.
    pub fn context(self) -> &'static str {
        match self {
            Self::General => {
                "General faculty support: answer the request directly and produce \
                 whatever teaching material best fits it."
            }
            Self::CourseDesign => {
                "Course design: propose learning outcomes, a module sequence, and \
                 activities aligned to each outcome."
            }
            Self::AssessmentBuilder => {
                "Assessment building: write quiz and exam questions with answer keys \
                 and a brief rubric, covering a range of difficulty."
            }
            Self::FeedbackDrafting => {
                "Feedback drafting: write constructive, specific feedback on student \
                 work that names strengths and concrete next steps."
            }
            Self::LectureSummary => {
                "Lecture summary: condense the material into key points, a glossary \
                 of terms, and discussion prompts."
            }
            Self::AccessibilityReview => {
                "Accessibility review: identify barriers in the material and suggest \
                 accessible alternatives following universal design principles."
            }
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
