use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{IntakeSubmission, Priority, RecordId, TokenNumber};
use super::intake::{IntakeGuard, IntakeViolation};
use super::notification::decide;
use super::repository::{
    RepositoryError, TokenError, TokenGenerator, TriageRecord, TriageRepository,
};
use super::scoring;

/// Service composing the intake guard, scorer, token source, and repository.
pub struct TriageIntakeService<R, T> {
    guard: IntakeGuard,
    repository: Arc<R>,
    tokens: Arc<T>,
    queue_limit: usize,
}

pub const DEFAULT_QUEUE_LIMIT: usize = 50;

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("rec-{id:06}"))
}

impl<R, T> TriageIntakeService<R, T>
where
    R: TriageRepository + 'static,
    T: TokenGenerator + 'static,
{
    pub fn new(repository: Arc<R>, tokens: Arc<T>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            tokens,
            queue_limit: DEFAULT_QUEUE_LIMIT,
        }
    }

    /// Override how many records the review queue returns when no limit is requested.
    pub fn with_queue_limit(mut self, limit: usize) -> Self {
        self.queue_limit = limit;
        self
    }

    /// Validate, score, issue a token, and persist a new intake.
    pub fn submit(
        &self,
        submission: IntakeSubmission,
    ) -> Result<IntakeReceipt, TriageServiceError> {
        let report = self.guard.report_from_submission(submission)?;
        let assessment = scoring::assess(&report);
        debug!(
            total_score = assessment.total_score,
            priority = %assessment.priority,
            "scored symptom report"
        );

        let token = self.tokens.next_token()?;
        let record = TriageRecord {
            record_id: next_record_id(),
            report,
            priority: assessment.priority,
            total_score: assessment.total_score,
            token_number: token.clone(),
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            record_id = %stored.record_id.0,
            token = %stored.token_number,
            priority = %stored.priority,
            "triage intake recorded"
        );

        let decision = decide(stored.priority, token);
        Ok(IntakeReceipt {
            record_id: stored.record_id,
            priority: decision.priority,
            action: decision.action,
            message: decision.message,
            token_number: decision.token_number,
        })
    }

    /// Fetch a stored record for staff review.
    pub fn get(&self, record_id: &RecordId) -> Result<TriageRecord, TriageServiceError> {
        let record = self
            .repository
            .fetch(record_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Records in review order, capped at `limit` or the configured default.
    pub fn queue(&self, limit: Option<usize>) -> Result<Vec<TriageRecord>, TriageServiceError> {
        let limit = limit.unwrap_or(self.queue_limit);
        Ok(self.repository.queue(limit)?)
    }
}

/// Response returned to the patient after a successful intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub record_id: RecordId,
    pub priority: Priority,
    pub action: String,
    pub message: String,
    pub token_number: TokenNumber,
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum TriageServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Token(#[from] TokenError),
}
