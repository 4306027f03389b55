use super::super::domain::{PainLevel, SeverityLevel, SymptomReport};
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_report(report: &SymptomReport) -> Vec<ScoreComponent> {
    let mut components = Vec::with_capacity(8);

    let (points, band) = age_points(report.age);
    components.push(ScoreComponent {
        factor: ScoreFactor::Age,
        points,
        notes: format!("age {} falls in {band} band", report.age),
    });

    for (factor, present, points) in [
        (ScoreFactor::ChestPain, report.chest_pain, 30),
        (ScoreFactor::Breathlessness, report.breathlessness, 25),
        (ScoreFactor::Fever, report.fever, 10),
    ] {
        components.push(ScoreComponent {
            factor,
            points: if present { points } else { 0 },
            notes: if present {
                format!("{} reported", factor.label())
            } else {
                format!("no {}", factor.label())
            },
        });
    }

    components.push(ScoreComponent {
        factor: ScoreFactor::PainLevel,
        points: pain_points(report.pain_level),
        notes: format!("{} pain", report.pain_level.label()),
    });

    components.push(ScoreComponent {
        factor: ScoreFactor::SeverityLevel,
        points: severity_points(report.severity_level),
        notes: format!("self-reported {} severity", report.severity_level.label()),
    });

    let condition = report.existing_condition();
    components.push(ScoreComponent {
        factor: ScoreFactor::ExistingCondition,
        points: condition.map(condition_points).unwrap_or(0),
        notes: match condition {
            Some(name) => format!("existing condition: {name}"),
            None => "no existing condition".to_string(),
        },
    });

    components.push(ScoreComponent {
        factor: ScoreFactor::SymptomDuration,
        points: duration_points(report.symptom_duration_days),
        notes: format!("symptoms for {} day(s)", report.symptom_duration_days),
    });

    components
}

fn age_points(age: u8) -> (u32, &'static str) {
    if age >= 70 {
        (25, "70+")
    } else if age >= 50 {
        (15, "50-69")
    } else if age >= 30 {
        (5, "30-49")
    } else {
        (0, "under 30")
    }
}

fn pain_points(level: PainLevel) -> u32 {
    match level {
        PainLevel::Severe => 25,
        PainLevel::Moderate => 15,
        PainLevel::Mild => 5,
    }
}

fn severity_points(level: SeverityLevel) -> u32 {
    match level {
        SeverityLevel::Critical => 35,
        SeverityLevel::High => 25,
        SeverityLevel::Medium => 15,
        SeverityLevel::Low => 5,
    }
}

// Exact, case-sensitive match: "heart disease" lands in the catch-all band.
fn condition_points(condition: &str) -> u32 {
    match condition {
        "Heart Disease" => 20,
        "Diabetes" => 15,
        "Hypertension" => 15,
        "Asthma" => 10,
        _ => 5,
    }
}

fn duration_points(days: u16) -> u32 {
    if days <= 1 {
        10
    } else if days <= 3 {
        5
    } else {
        0
    }
}
