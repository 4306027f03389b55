mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{Priority, SymptomReport};

/// Factors that contribute points to a triage score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    ChestPain,
    Breathlessness,
    Fever,
    PainLevel,
    SeverityLevel,
    ExistingCondition,
    SymptomDuration,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::Age => "age",
            ScoreFactor::ChestPain => "chest pain",
            ScoreFactor::Breathlessness => "breathlessness",
            ScoreFactor::Fever => "fever",
            ScoreFactor::PainLevel => "pain level",
            ScoreFactor::SeverityLevel => "severity level",
            ScoreFactor::ExistingCondition => "existing condition",
            ScoreFactor::SymptomDuration => "symptom duration",
        }
    }
}

/// Points awarded for a single factor, kept for staff-facing audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

/// Full scoring trail for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub priority: Priority,
    pub total_score: u32,
    pub components: Vec<ScoreComponent>,
}

/// Score a validated report and return the tier with its breakdown.
pub fn assess(report: &SymptomReport) -> Assessment {
    let components = rules::score_report(report);
    let total_score = components.iter().map(|component| component.points).sum();

    Assessment {
        priority: Priority::from_total(total_score),
        total_score,
        components,
    }
}

/// Map a validated report to its priority tier.
pub fn score(report: &SymptomReport) -> Priority {
    assess(report).priority
}
