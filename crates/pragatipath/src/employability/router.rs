use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::StudentId;
use super::repository::{
    ApplicationRepository, CertificateRepository, InterviewRepository, RepositoryError,
    StudentRepository,
};
use super::service::{EmployabilityScoreService, ScoreServiceError};

/// Request body shared by the scoring endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    student_id: String,
}

/// Router builder exposing the compute-and-persist and preview endpoints.
pub fn employability_router<S, C, A, I>(
    service: Arc<EmployabilityScoreService<S, C, A, I>>,
) -> Router
where
    S: StudentRepository + 'static,
    C: CertificateRepository + 'static,
    A: ApplicationRepository + 'static,
    I: InterviewRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/employability/score",
            post(score_handler::<S, C, A, I>),
        )
        .route(
            "/api/v1/employability/preview",
            post(preview_handler::<S, C, A, I>),
        )
        .with_state(service)
}

pub(crate) async fn score_handler<S, C, A, I>(
    State(service): State<Arc<EmployabilityScoreService<S, C, A, I>>>,
    body: Result<axum::Json<ScoreRequest>, JsonRejection>,
) -> Response
where
    S: StudentRepository + 'static,
    C: CertificateRepository + 'static,
    A: ApplicationRepository + 'static,
    I: InterviewRepository + 'static,
{
    let request = match body {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return malformed_request(rejection),
    };

    let id = StudentId(request.student_id);
    match service.compute_and_store(&id) {
        Ok(report) => {
            let payload = json!({ "success": true, "score": report.total_score });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<S, C, A, I>(
    State(service): State<Arc<EmployabilityScoreService<S, C, A, I>>>,
    body: Result<axum::Json<ScoreRequest>, JsonRejection>,
) -> Response
where
    S: StudentRepository + 'static,
    C: CertificateRepository + 'static,
    A: ApplicationRepository + 'static,
    I: InterviewRepository + 'static,
{
    let request = match body {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return malformed_request(rejection),
    };

    let id = StudentId(request.student_id);
    match service.preview(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn malformed_request(rejection: JsonRejection) -> Response {
    let payload = json!({ "error": format!("invalid request body: {rejection}") });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(error: ScoreServiceError) -> Response {
    let ScoreServiceError::Repository(repository_error) = &error;
    let status = match repository_error {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
