use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use super::candidate::required;
use crate::{
    dto::jobs_dto::JobSummaryQuery,
    error::Result,
    services::backend_service::{BackendEndpoint, NO_QUERY},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs/salary",
    responses(
        (status = 200, description = "Salary negotiation document")
    )
)]
#[axum::debug_handler]
pub async fn salary(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Salary, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/jobs/offer",
    responses(
        (status = 200, description = "Offer letter for the candidate")
    )
)]
#[axum::debug_handler]
pub async fn offer(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Offer, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/jobs/info/summary",
    params(
        ("jobId" = String, Query, description = "Job opening id"),
        ("access_token" = Option<String>, Query, description = "Passed through to the backend")
    ),
    responses(
        (status = 200, description = "Candidate count for the job"),
        (status = 400, description = "Missing jobId")
    )
)]
#[axum::debug_handler]
pub async fn job_summary(
    State(state): State<AppState>,
    Query(query): Query<JobSummaryQuery>,
) -> Result<impl IntoResponse> {
    let job_id = required(query.job_id, "jobId")?;
    let token: Vec<(&str, String)> = query
        .access_token
        .into_iter()
        .map(|t| ("access_token", t))
        .collect();
    let body = state
        .backend
        .get(BackendEndpoint::JobCandidateCount(job_id), &token)
        .await?;
    Ok(Json(body))
}
