use super::common::*;
use crate::triage::domain::{PainLevel, SeverityLevel};
use crate::triage::intake::{IntakeGuard, IntakeViolation};

#[test]
fn guard_builds_report_from_valid_submission() {
    let report = IntakeGuard
        .report_from_submission(submission())
        .expect("valid submission");

    assert_eq!(report, respiratory_report());
}

#[test]
fn guard_trims_and_normalizes_existing_disease() {
    let mut raw = submission();
    raw.existing_disease = Some("  Asthma ".to_string());
    let report = IntakeGuard.report_from_submission(raw).expect("valid");
    assert_eq!(report.existing_disease.as_deref(), Some("Asthma"));

    let mut raw = submission();
    raw.existing_disease = Some("   ".to_string());
    let report = IntakeGuard.report_from_submission(raw).expect("valid");
    assert_eq!(report.existing_disease, None);
}

#[test]
fn guard_accepts_range_edges() {
    let mut raw = submission();
    raw.age = 150;
    raw.symptom_duration_days = 365;
    let report = IntakeGuard.report_from_submission(raw).expect("upper edges");
    assert_eq!(report.age, 150);
    assert_eq!(report.symptom_duration_days, 365);

    let mut raw = submission();
    raw.age = 0;
    raw.symptom_duration_days = 0;
    raw.gender = "Non binary".to_string();
    let report = IntakeGuard.report_from_submission(raw).expect("lower edges");
    assert_eq!(report.age, 0);
    assert_eq!(report.gender, "Non binary");
}

#[test]
fn guard_rejects_out_of_range_numbers() {
    for (age, days) in [(-1, 5), (151, 5), (40, -1), (40, 366)] {
        let mut raw = submission();
        raw.age = age;
        raw.symptom_duration_days = days;
        match IntakeGuard.report_from_submission(raw) {
            Err(IntakeViolation::Constraints(errors)) => {
                assert!(!errors.field_errors().is_empty());
            }
            other => panic!("expected constraint violation for {age}/{days}, got {other:?}"),
        }
    }
}

#[test]
fn guard_rejects_bad_gender_values() {
    let mut raw = submission();
    raw.gender = "   ".to_string();
    assert!(matches!(
        IntakeGuard.report_from_submission(raw),
        Err(IntakeViolation::Constraints(_))
    ));

    let mut raw = submission();
    raw.gender = "F3male".to_string();
    assert!(matches!(
        IntakeGuard.report_from_submission(raw),
        Err(IntakeViolation::InvalidGender)
    ));

    let mut raw = submission();
    raw.gender = "a".repeat(21);
    assert!(matches!(
        IntakeGuard.report_from_submission(raw),
        Err(IntakeViolation::Constraints(_))
    ));
}

#[test]
fn guard_rejects_overlong_condition() {
    let mut raw = submission();
    raw.existing_disease = Some("x".repeat(101));
    assert!(matches!(
        IntakeGuard.report_from_submission(raw),
        Err(IntakeViolation::Constraints(_))
    ));
}

#[test]
fn guard_rejects_unknown_enum_labels() {
    let mut raw = submission();
    raw.pain_level = "Severe".to_string();
    match IntakeGuard.report_from_submission(raw) {
        Err(IntakeViolation::UnknownPainLevel(label)) => assert_eq!(label, "Severe"),
        other => panic!("expected unknown pain level, got {other:?}"),
    }

    let mut raw = submission();
    raw.severity_level = "urgent".to_string();
    match IntakeGuard.report_from_submission(raw) {
        Err(IntakeViolation::UnknownSeverityLevel(label)) => assert_eq!(label, "urgent"),
        other => panic!("expected unknown severity level, got {other:?}"),
    }
}

#[test]
fn enum_labels_round_trip_through_parse() {
    for level in [PainLevel::Mild, PainLevel::Moderate, PainLevel::Severe] {
        assert_eq!(PainLevel::parse(level.label()), Some(level));
    }
    for level in [
        SeverityLevel::Low,
        SeverityLevel::Medium,
        SeverityLevel::High,
        SeverityLevel::Critical,
    ] {
        assert_eq!(SeverityLevel::parse(level.label()), Some(level));
    }
}
