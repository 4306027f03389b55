use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier wrapper for persisted triage records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Queue token handed to the patient. Opaque to the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenNumber(pub String);

impl fmt::Display for TokenNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw self-reported intake payload exactly as it arrives over HTTP.
///
/// Integer fields are wide on purpose so out-of-range values reach the intake
/// guard instead of failing JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IntakeSubmission {
    #[validate(range(min = 0, max = 150))]
    pub age: i64,
    #[validate(length(min = 1, max = 20))]
    pub gender: String,
    pub chest_pain: bool,
    pub breathlessness: bool,
    pub fever: bool,
    pub pain_level: String,
    #[validate(range(min = 0, max = 365))]
    pub symptom_duration_days: i64,
    pub severity_level: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub existing_disease: Option<String>,
}

/// Validated symptom report consumed by the priority scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub age: u8,
    pub gender: String,
    pub chest_pain: bool,
    pub breathlessness: bool,
    pub fever: bool,
    pub pain_level: PainLevel,
    pub symptom_duration_days: u16,
    pub severity_level: SeverityLevel,
    pub existing_disease: Option<String>,
}

impl SymptomReport {
    /// The reported condition, if it counts for scoring. The literal `"None"`
    /// sentinel is treated the same as an absent value.
    pub fn existing_condition(&self) -> Option<&str> {
        match self.existing_disease.as_deref() {
            None | Some("") | Some(NO_CONDITION_SENTINEL) => None,
            Some(condition) => Some(condition),
        }
    }
}

pub(crate) const NO_CONDITION_SENTINEL: &str = "None";

/// Self-reported pain intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainLevel {
    Mild,
    Moderate,
    Severe,
}

impl PainLevel {
    pub const fn label(self) -> &'static str {
        match self {
            PainLevel::Mild => "mild",
            PainLevel::Moderate => "moderate",
            PainLevel::Severe => "severe",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

/// Patient's own judgement of how serious the episode is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Triage urgency tier. Ordering follows urgency: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const HIGH_THRESHOLD: u32 = 75;
    pub const MEDIUM_THRESHOLD: u32 = 45;

    /// Bucket an accumulated score into a tier.
    pub const fn from_total(total: u32) -> Self {
        if total >= Self::HIGH_THRESHOLD {
            Priority::High
        } else if total >= Self::MEDIUM_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome surfaced to the patient after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageDecision {
    pub priority: Priority,
    pub action: String,
    pub message: String,
    pub token_number: TokenNumber,
}
