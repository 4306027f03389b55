use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use super::domain::{IntakeSubmission, RecordId};
use super::repository::{RepositoryError, TokenGenerator, TriageRecordView, TriageRepository};
use super::service::{TriageIntakeService, TriageServiceError};

const INVALID_INPUT: &str = "Invalid input data";
const RECORD_EXISTS: &str = "Record already exists";
const RECORD_NOT_FOUND: &str = "Record not found";
const INTERNAL_ERROR: &str = "Internal server error";

/// Router builder exposing HTTP endpoints for intake and staff review.
pub fn triage_router<R, T>(service: Arc<TriageIntakeService<R, T>>) -> Router
where
    R: TriageRepository + 'static,
    T: TokenGenerator + 'static,
{
    Router::new()
        .route("/api/v1/triage/intake", post(intake_handler::<R, T>))
        .route(
            "/api/v1/triage/records/:record_id",
            get(record_handler::<R, T>),
        )
        .route("/api/v1/triage/queue", get(queue_handler::<R, T>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn intake_handler<R, T>(
    State(service): State<Arc<TriageIntakeService<R, T>>>,
    payload: Result<axum::Json<IntakeSubmission>, JsonRejection>,
) -> Response
where
    R: TriageRepository + 'static,
    T: TokenGenerator + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected malformed intake payload");
            return error_response(StatusCode::BAD_REQUEST, INVALID_INPUT);
        }
    };

    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(TriageServiceError::Intake(violation)) => {
            warn!(error = %violation, "intake validation failed");
            error_response(StatusCode::BAD_REQUEST, INVALID_INPUT)
        }
        Err(TriageServiceError::Repository(RepositoryError::Conflict)) => {
            warn!("intake record conflicted with an existing record");
            error_response(StatusCode::CONFLICT, RECORD_EXISTS)
        }
        Err(other) => {
            error!(error = %other, "intake failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

pub(crate) async fn record_handler<R, T>(
    State(service): State<Arc<TriageIntakeService<R, T>>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: TriageRepository + 'static,
    T: TokenGenerator + 'static,
{
    match service.get(&RecordId(record_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.review_view())).into_response(),
        Err(TriageServiceError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, RECORD_NOT_FOUND)
        }
        Err(other) => {
            error!(error = %other, "record lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueueParams {
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn queue_handler<R, T>(
    State(service): State<Arc<TriageIntakeService<R, T>>>,
    params: Result<Query<QueueParams>, QueryRejection>,
) -> Response
where
    R: TriageRepository + 'static,
    T: TokenGenerator + 'static,
{
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected malformed queue query");
            return error_response(StatusCode::BAD_REQUEST, INVALID_INPUT);
        }
    };

    match service.queue(params.limit) {
        Ok(records) => {
            let views: Vec<TriageRecordView> =
                records.iter().map(|record| record.review_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            error!(error = %other, "queue lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}
