use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::triage::domain::{
    IntakeSubmission, PainLevel, RecordId, SeverityLevel, SymptomReport, TokenNumber,
};
use crate::triage::repository::{
    review_order, RepositoryError, SequentialTokenGenerator, TokenError, TokenGenerator,
    TriageRecord, TriageRepository,
};
use crate::triage::{triage_router, TriageIntakeService};

/// Baseline report that scores zero points in every optional band.
pub(super) fn quiet_report() -> SymptomReport {
    SymptomReport {
        age: 25,
        gender: "Female".to_string(),
        chest_pain: false,
        breathlessness: false,
        fever: false,
        pain_level: PainLevel::Mild,
        symptom_duration_days: 10,
        severity_level: SeverityLevel::Low,
        existing_disease: None,
    }
}

pub(super) fn cardiac_report() -> SymptomReport {
    SymptomReport {
        age: 75,
        gender: "Male".to_string(),
        chest_pain: true,
        breathlessness: true,
        fever: false,
        pain_level: PainLevel::Severe,
        symptom_duration_days: 1,
        severity_level: SeverityLevel::Critical,
        existing_disease: Some("Heart Disease".to_string()),
    }
}

pub(super) fn respiratory_report() -> SymptomReport {
    SymptomReport {
        age: 55,
        gender: "Female".to_string(),
        chest_pain: false,
        breathlessness: true,
        fever: true,
        pain_level: PainLevel::Moderate,
        symptom_duration_days: 5,
        severity_level: SeverityLevel::Medium,
        existing_disease: Some("Diabetes".to_string()),
    }
}

pub(super) fn submission() -> IntakeSubmission {
    IntakeSubmission {
        age: 55,
        gender: "Female".to_string(),
        chest_pain: false,
        breathlessness: true,
        fever: true,
        pain_level: "moderate".to_string(),
        symptom_duration_days: 5,
        severity_level: "medium".to_string(),
        existing_disease: Some("Diabetes".to_string()),
    }
}

pub(super) fn low_priority_submission() -> IntakeSubmission {
    IntakeSubmission {
        age: 25,
        gender: "Male".to_string(),
        chest_pain: false,
        breathlessness: false,
        fever: false,
        pain_level: "mild".to_string(),
        symptom_duration_days: 10,
        severity_level: "low".to_string(),
        existing_disease: None,
    }
}

pub(super) fn build_service() -> (
    TriageIntakeService<MemoryRepository, SequentialTokenGenerator>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let tokens = Arc::new(SequentialTokenGenerator::new("T-"));
    let service = TriageIntakeService::new(repository.clone(), tokens);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<RecordId, TriageRecord>>>,
}

impl TriageRepository for MemoryRepository {
    fn insert(&self, record: TriageRecord) -> Result<TriageRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.record_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.record_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<TriageRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn queue(&self, limit: usize) -> Result<Vec<TriageRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<TriageRecord> = guard.values().cloned().collect();
        review_order(&mut records);
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl TriageRepository for ConflictRepository {
    fn insert(&self, _record: TriageRecord) -> Result<TriageRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<TriageRecord>, RepositoryError> {
        Ok(None)
    }

    fn queue(&self, _limit: usize) -> Result<Vec<TriageRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl TriageRepository for UnavailableRepository {
    fn insert(&self, _record: TriageRecord) -> Result<TriageRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<TriageRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn queue(&self, _limit: usize) -> Result<Vec<TriageRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ExhaustedTokens;

impl TokenGenerator for ExhaustedTokens {
    fn next_token(&self) -> Result<TokenNumber, TokenError> {
        Err(TokenError::Exhausted)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: TriageIntakeService<MemoryRepository, SequentialTokenGenerator>,
) -> axum::Router {
    triage_router(Arc::new(service))
}
