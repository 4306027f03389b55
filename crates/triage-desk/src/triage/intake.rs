use validator::Validate;

use super::domain::{IntakeSubmission, PainLevel, SeverityLevel, SymptomReport};

/// Validation errors raised by the intake guard. Detail stays server side.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("submission failed field constraints: {0}")]
    Constraints(#[from] validator::ValidationErrors),
    #[error("gender must contain letters and whitespace only")]
    InvalidGender,
    #[error("unknown pain level '{0}'")]
    UnknownPainLevel(String),
    #[error("unknown severity level '{0}'")]
    UnknownSeverityLevel(String),
}

/// Guard responsible for producing `SymptomReport` instances from raw submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Convert an inbound submission into a validated symptom report.
    pub fn report_from_submission(
        &self,
        mut submission: IntakeSubmission,
    ) -> Result<SymptomReport, IntakeViolation> {
        submission.gender = submission.gender.trim().to_string();
        submission.existing_disease = submission
            .existing_disease
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        submission.validate()?;

        if !submission
            .gender
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace())
        {
            return Err(IntakeViolation::InvalidGender);
        }

        let pain_level = PainLevel::parse(&submission.pain_level)
            .ok_or_else(|| IntakeViolation::UnknownPainLevel(submission.pain_level.clone()))?;
        let severity_level = SeverityLevel::parse(&submission.severity_level).ok_or_else(|| {
            IntakeViolation::UnknownSeverityLevel(submission.severity_level.clone())
        })?;

        // Ranges were checked by `validate`, so the narrowing casts are lossless.
        Ok(SymptomReport {
            age: submission.age as u8,
            gender: submission.gender,
            chest_pain: submission.chest_pain,
            breathlessness: submission.breathlessness,
            fever: submission.fever,
            pain_level,
            symptom_duration_days: submission.symptom_duration_days as u16,
            severity_level,
            existing_disease: submission.existing_disease,
        })
    }
}
