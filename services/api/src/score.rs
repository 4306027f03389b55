use clap::Args;
use serde::Serialize;
use triage_desk::config::AppConfig;
use triage_desk::error::AppError;
use triage_desk::triage::{
    assess, decide, Assessment, IntakeGuard, IntakeSubmission, SequentialTokenGenerator,
    TokenGenerator, TokenNumber, TriageDecision, TriageServiceError,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Patient age in years (0-150)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: i64,
    /// Self-reported gender (letters and spaces only)
    #[arg(long)]
    pub(crate) gender: String,
    /// Patient reports chest pain
    #[arg(long)]
    pub(crate) chest_pain: bool,
    /// Patient reports breathlessness
    #[arg(long)]
    pub(crate) breathlessness: bool,
    /// Patient reports fever
    #[arg(long)]
    pub(crate) fever: bool,
    /// Pain level: mild, moderate, or severe
    #[arg(long)]
    pub(crate) pain_level: String,
    /// Days since symptoms began (0-365)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) duration_days: i64,
    /// Self-reported severity: low, medium, high, or critical
    #[arg(long)]
    pub(crate) severity_level: String,
    /// Existing condition, e.g. "Diabetes"
    #[arg(long)]
    pub(crate) existing_disease: Option<String>,
    /// Token to embed in the notification (defaults to the first token of the configured sequence)
    #[arg(long)]
    pub(crate) token: Option<String>,
    /// Emit the decision and breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn submission(&self) -> IntakeSubmission {
        IntakeSubmission {
            age: self.age,
            gender: self.gender.clone(),
            chest_pain: self.chest_pain,
            breathlessness: self.breathlessness,
            fever: self.fever,
            pain_level: self.pain_level.clone(),
            symptom_duration_days: self.duration_days,
            severity_level: self.severity_level.clone(),
            existing_disease: self.existing_disease.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreOutput {
    decision: TriageDecision,
    assessment: Assessment,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let token = match args.token.clone() {
        Some(token) => TokenNumber(token),
        None => {
            let config = AppConfig::load()?;
            SequentialTokenGenerator::new(config.triage.token_prefix)
                .next_token()
                .map_err(TriageServiceError::from)?
        }
    };

    let output = score_submission(args.submission(), token)?;

    if args.json {
        write_json(std::io::stdout().lock(), &output)?;
    } else {
        render_score(&output);
    }
    Ok(())
}

fn score_submission(
    submission: IntakeSubmission,
    token: TokenNumber,
) -> Result<ScoreOutput, AppError> {
    let report = IntakeGuard
        .report_from_submission(submission)
        .map_err(TriageServiceError::from)?;
    let assessment = assess(&report);
    let decision = decide(assessment.priority, token);
    Ok(ScoreOutput {
        decision,
        assessment,
    })
}

fn write_json<W: std::io::Write>(mut writer: W, output: &ScoreOutput) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, output).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    Ok(())
}

fn render_score(output: &ScoreOutput) {
    println!("{}", output.decision.message);

    println!("\nScore breakdown");
    for component in &output.assessment.components {
        println!(
            "- {:<18} {:>3}  {}",
            component.factor.label(),
            component.points,
            component.notes
        );
    }
    println!(
        "Total: {} ({})",
        output.assessment.total_score, output.decision.priority
    );
}
