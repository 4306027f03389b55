use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use triage_desk::triage::{review_order, RecordId, RepositoryError, TriageRecord, TriageRepository};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store standing in for the facility's patient database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTriageRepository {
    records: Arc<Mutex<HashMap<RecordId, TriageRecord>>>,
}

impl InMemoryTriageRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<RecordId, TriageRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store lock poisoned".to_string()))
    }
}

impl TriageRepository for InMemoryTriageRepository {
    fn insert(&self, record: TriageRecord) -> Result<TriageRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.record_id)
            || guard
                .values()
                .any(|existing| existing.token_number == record.token_number)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.record_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<TriageRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn queue(&self, limit: usize) -> Result<Vec<TriageRecord>, RepositoryError> {
        let guard = self.lock()?;
        let mut records: Vec<TriageRecord> = guard.values().cloned().collect();
        review_order(&mut records);
        records.truncate(limit);
        Ok(records)
    }
}
