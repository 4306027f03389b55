//! Patient intake triage: validation, priority scoring, queue tokens, and review records.
//!
//! The scorer and message composer are pure; everything that touches storage or token
//! issuance sits behind the traits in [`repository`].

pub mod domain;
pub mod intake;
pub mod notification;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    IntakeSubmission, PainLevel, Priority, RecordId, SeverityLevel, SymptomReport, TokenNumber,
    TriageDecision,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use notification::{action_for, decide, notification_for};
pub use repository::{
    review_order, RepositoryError, SequentialTokenGenerator, TokenError, TokenGenerator,
    TriageRecord, TriageRecordView, TriageRepository,
};
pub use router::triage_router;
pub use scoring::{assess, score, Assessment, ScoreComponent, ScoreFactor};
pub use service::{IntakeReceipt, TriageIntakeService, TriageServiceError, DEFAULT_QUEUE_LIMIT};
