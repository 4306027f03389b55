use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Priority, RecordId, SymptomReport, TokenNumber};
use super::notification::action_for;

/// Repository record stored for staff review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRecord {
    pub record_id: RecordId,
    pub report: SymptomReport,
    pub priority: Priority,
    pub total_score: u32,
    pub token_number: TokenNumber,
    pub submitted_at: DateTime<Utc>,
}

impl TriageRecord {
    pub fn review_view(&self) -> TriageRecordView {
        TriageRecordView {
            record_id: self.record_id.clone(),
            token_number: self.token_number.clone(),
            priority: self.priority,
            action: action_for(self.priority),
            total_score: self.total_score,
            submitted_at: self.submitted_at,
            report: self.report.clone(),
        }
    }
}

/// Staff-facing representation of a stored record.
#[derive(Debug, Clone, Serialize)]
pub struct TriageRecordView {
    pub record_id: RecordId,
    pub token_number: TokenNumber,
    pub priority: Priority,
    pub action: &'static str,
    pub total_score: u32,
    pub submitted_at: DateTime<Utc>,
    pub report: SymptomReport,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait TriageRepository: Send + Sync {
    fn insert(&self, record: TriageRecord) -> Result<TriageRecord, RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<TriageRecord>, RepositoryError>;
    /// Records awaiting review, most urgent first and oldest first within a tier.
    fn queue(&self, limit: usize) -> Result<Vec<TriageRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Source of queue tokens. Implementations must never hand out a token twice.
pub trait TokenGenerator: Send + Sync {
    fn next_token(&self) -> Result<TokenNumber, TokenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token sequence exhausted")]
    Exhausted,
}

/// Process-local token sequence rendering `{prefix}{n:04}`.
#[derive(Debug)]
pub struct SequentialTokenGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTokenGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl TokenGenerator for SequentialTokenGenerator {
    fn next_token(&self) -> Result<TokenNumber, TokenError> {
        let value = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| TokenError::Exhausted)?;
        Ok(TokenNumber(format!("{}{value:04}", self.prefix)))
    }
}

/// Sort records into review order: priority descending, then submission time.
pub fn review_order(records: &mut [TriageRecord]) {
    records.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.record_id.0.cmp(&b.record_id.0))
    });
}
