//! Lookup lists for the profile form, plus the single job opening read.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use super::candidate::required;
use crate::{
    dto::jobs_dto::{LocationQuery, SingleJobQuery},
    error::Result,
    services::backend_service::{BackendEndpoint, NO_QUERY},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/masters/location",
    params(
        ("page" = Option<u32>, Query, description = "Result page"),
        ("name" = Option<String>, Query, description = "Name filter")
    ),
    responses(
        (status = 200, description = "Locations")
    )
)]
#[axum::debug_handler]
pub async fn location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Location, &query).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/masters/currency",
    responses(
        (status = 200, description = "Currencies")
    )
)]
#[axum::debug_handler]
pub async fn currency(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Currency, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/masters/country",
    responses(
        (status = 200, description = "Countries with currency and timezone")
    )
)]
#[axum::debug_handler]
pub async fn country(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Country, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/masters/keyskills",
    responses(
        (status = 200, description = "Key skill names")
    )
)]
#[axum::debug_handler]
pub async fn key_skills(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::KeySkills, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/masters/singleget",
    params(
        ("job_id" = String, Query, description = "Job opening id")
    ),
    responses(
        (status = 200, description = "Job opening detail"),
        (status = 400, description = "Missing job_id")
    )
)]
#[axum::debug_handler]
pub async fn single_job(
    State(state): State<AppState>,
    Query(query): Query<SingleJobQuery>,
) -> Result<impl IntoResponse> {
    let job_id = required(query.job_id, "job_id")?;
    let body = state
        .backend
        .get(BackendEndpoint::SingleJob, &[("job_id", job_id)])
        .await?;
    Ok(Json(body))
}
