//! `/api/candidate/*` proxy routes. Each forwards to the backend and hands its
//! JSON back untouched.

use axum::{
    extract::{Multipart, Query, State},
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use tracing::info;
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        ActionablesQuery, CandidateQuery, HistoryQuery, JobApplicationQuery, ProfileEditPayload,
        ProfileEditQuery, RecommendedJobsQuery, SlotAcceptPayload, SlotQuery,
    },
    error::{Error, Result},
    services::backend_service::{BackendEndpoint, FileUpload, NO_QUERY},
    utils::validation::check_upload,
    AppState,
};

pub(crate) fn required(value: Option<String>, name: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::BadRequest(format!("Missing {}", name)))
}

#[utoipa::path(
    get,
    path = "/api/candidate/get",
    params(
        ("user_id" = String, Query, description = "Portal user id")
    ),
    responses(
        (status = 200, description = "Candidate profile and current version"),
        (status = 400, description = "Missing user_id"),
        (status = 502, description = "Backend unreachable")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Query(query): Query<CandidateQuery>,
) -> Result<impl IntoResponse> {
    let user_id = required(query.user_id, "user_id")?;
    let body = state
        .backend
        .get(BackendEndpoint::Candidate, &[("user_id", user_id)])
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/recommended-jobs",
    params(
        ("page" = Option<u32>, Query, description = "Result page")
    ),
    responses(
        (status = 200, description = "Jobs matched to the candidate")
    )
)]
#[axum::debug_handler]
pub async fn recommended_jobs(
    State(state): State<AppState>,
    Query(query): Query<RecommendedJobsQuery>,
) -> Result<impl IntoResponse> {
    let body = state
        .backend
        .get(BackendEndpoint::RecommendedJobs, &query)
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/job-application",
    params(
        ("candidate_id" = String, Query, description = "Candidate profile name")
    ),
    responses(
        (status = 200, description = "Application statuses"),
        (status = 400, description = "Missing candidate_id")
    )
)]
#[axum::debug_handler]
pub async fn job_application(
    State(state): State<AppState>,
    Query(query): Query<JobApplicationQuery>,
) -> Result<impl IntoResponse> {
    let candidate_id = required(query.candidate_id, "candidate_id")?;
    let body = state
        .backend
        .get(BackendEndpoint::JobApplication, &[("candidate_id", candidate_id)])
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/scheduled-interview",
    responses(
        (status = 200, description = "Upcoming interviews")
    )
)]
#[axum::debug_handler]
pub async fn scheduled_interview(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state
        .backend
        .get(BackendEndpoint::ScheduledInterview, NO_QUERY)
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/actionables",
    params(
        ("search" = Option<String>, Query, description = "Free text filter")
    ),
    responses(
        (status = 200, description = "Pending candidate actions")
    )
)]
#[axum::debug_handler]
pub async fn actionables(
    State(state): State<AppState>,
    Query(query): Query<ActionablesQuery>,
) -> Result<impl IntoResponse> {
    let body = state
        .backend
        .get(BackendEndpoint::Actionables, &query)
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/history",
    params(
        ("name" = Option<String>, Query, description = "Candidate profile name")
    ),
    responses(
        (status = 200, description = "Profile versions")
    )
)]
#[axum::debug_handler]
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::History, &query).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/contract",
    responses(
        (status = 200, description = "Contracts with their timesheet weeks")
    )
)]
#[axum::debug_handler]
pub async fn contract(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.backend.get(BackendEndpoint::Contract, NO_QUERY).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/candidate/slot_get",
    params(
        ("interview_id" = String, Query, description = "Interview document name")
    ),
    responses(
        (status = 200, description = "Slots offered for the interview"),
        (status = 400, description = "Missing interview_id")
    )
)]
#[axum::debug_handler]
pub async fn slot_get(
    State(state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Result<impl IntoResponse> {
    let interview_id = required(query.interview_id, "interview_id")?;
    let body = state
        .backend
        .get(BackendEndpoint::SlotGet, &[("interview_id", interview_id)])
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/api/candidate/slot_accept",
    request_body = SlotAcceptPayload,
    responses(
        (status = 200, description = "Backend verdict on the chosen slot"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn slot_accept(
    State(state): State<AppState>,
    Json(payload): Json<SlotAcceptPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    info!(interview = %payload.interview_name, slot = %payload.slot_name, "Accepting interview slot");
    let body = state
        .backend
        .post(BackendEndpoint::SlotAccept, NO_QUERY, &payload)
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/api/candidate/profile_edit",
    params(
        ("profile_name" = String, Query, description = "Candidate profile name")
    ),
    request_body = ProfileEditPayload,
    responses(
        (status = 200, description = "Profile saved"),
        (status = 400, description = "Missing profile_name or invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn profile_edit(
    State(state): State<AppState>,
    Query(query): Query<ProfileEditQuery>,
    Json(payload): Json<ProfileEditPayload>,
) -> Result<impl IntoResponse> {
    let profile_name = required(query.profile_name, "profile_name")?;
    payload.validate()?;
    let body = state
        .backend
        .post(
            BackendEndpoint::ProfileEdit,
            &[("profile_name", profile_name)],
            &payload,
        )
        .await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/api/candidate/file_upload",
    responses(
        (status = 200, description = "Stored file, `{message: {file_url}}`"),
        (status = 400, description = "No file, file too large or type not allowed")
    )
)]
#[axum::debug_handler]
pub async fn file_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let max_bytes = state.config.max_upload_mb * 1024 * 1024;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| Error::BadRequest("Missing file name".into()))?;
        let content_type = field.content_type().map(str::to_string);
        let data: Bytes = field.bytes().await?;

        if data.len() > max_bytes {
            return Err(Error::BadRequest(format!(
                "File exceeds {} MB",
                state.config.max_upload_mb
            )));
        }
        check_upload(&file_name, &data)?;

        info!(file_name = %file_name, size = data.len(), "Uploading resume");
        let body = state
            .backend
            .upload_file(FileUpload {
                file_name,
                content_type,
                data: data.to_vec(),
            })
            .await?;
        return Ok(Json(body));
    }

    Err(Error::BadRequest("Missing file".into()))
}
