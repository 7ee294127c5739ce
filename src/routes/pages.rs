//! Portal pages. Every request builds a fresh store, runs the fetches the page
//! needs and answers with the page's view model.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    dto::{
        candidate_dto::SlotAcceptPayload,
        page_dto::{
            ContractQuery, DashboardQuery, HistoryPageQuery, InterviewPageQuery,
            ProposalActionPayload, ProposalActionResponse, SalaryPageQuery, SetLatestPayload,
            TimesheetActionResponse,
        },
    },
    error::{Error, Result},
    mappers::candidate::{build_profile_edit_payload, first_candidate},
    models::{candidate::SingleCandidateData, salary::Proposal},
    middleware::session::SessionCookies,
    store::DataStore,
    utils::time::today,
    views::{
        contract::{
            build_contract, default_sort, handle_panel_action, ContractInputs, PanelAction,
            PanelSubmission,
        },
        dashboard::{build_dashboard, DashboardInputs},
        history::{build_history, confirm_set_latest, HistoryInputs, HistoryView},
        interview::{accept_toast, build_drawer, InterviewView},
        job::build_job_detail,
        offer::build_offer,
        profile::{build_edit_profile, build_profile, EditProfileView, FormOptions},
        salary::{accept_proposal, build_salary, request_clarification},
        table::{SortState, DEFAULT_PAGE_SIZE},
    },
    AppState,
};

const PROFILE_UPDATE_FAILED: &str = "Profile update failed";

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub page: &'static str,
    pub user: Option<String>,
    pub view: T,
}

fn page<T: Serialize>(name: &'static str, session: &SessionCookies, view: T) -> Json<Page<T>> {
    Json(Page {
        page: name,
        user: session.full_name.clone(),
        view,
    })
}

/// Reads the candidate slice. A guest never fetched it, which renders the same
/// as a failed fetch.
async fn read_candidate(store: &DataStore) -> Option<Option<SingleCandidateData>> {
    store
        .single_candidate
        .get()
        .await
        .map(|envelopes| first_candidate(&envelopes))
        .or(Some(None))
}

async fn fetch_candidate(store: &DataStore, session: &SessionCookies) {
    if let Some(user_id) = session.user() {
        store.fetch_single_candidate(user_id).await;
    }
}

#[axum::debug_handler]
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    session: SessionCookies,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());

    tokio::join!(
        fetch_candidate(&store, &session),
        store.fetch_recommended_jobs(),
        store.fetch_scheduled_interview(),
        store.fetch_actionables(),
    );

    let candidate = read_candidate(&store).await;
    if let Some(name) = candidate.as_ref().and_then(|c| c.as_ref()).map(|c| c.name.clone()) {
        if !name.is_empty() {
            store.fetch_application_status(&name).await;
        }
    }

    let view = build_dashboard(DashboardInputs {
        candidate,
        jobs: store.recommended_jobs.get().await,
        applications: store.application_status.get().await.or(Some(Vec::new())),
        interviews: store.scheduled_interview.get().await,
        actionables: store.actionables.get().await,
        interview_slot: query.interview_slot,
    });
    Ok(page("dashboard", &session, view))
}

#[axum::debug_handler]
pub async fn contract(
    State(state): State<AppState>,
    session: SessionCookies,
    Query(query): Query<ContractQuery>,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_contract().await;

    let mut sort = default_sort();
    if let Some(key) = query.sort {
        sort = SortState {
            key,
            dir: query.dir.unwrap_or_default(),
        };
    }
    if let Some(key) = query.toggle {
        sort = sort.toggle(key);
    }

    let view = build_contract(ContractInputs {
        contracts: store.contract.get().await,
        selected: query.contract.unwrap_or(0),
        sort,
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        panel: query.panel,
        panel_week: query.week,
        today: today(),
    });
    Ok(page("contract", &session, view))
}

#[axum::debug_handler]
pub async fn timesheet_action(
    State(state): State<AppState>,
    Json(mut submission): Json<PanelSubmission>,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_contract().await;
    let contracts = store.contract.get().await.unwrap_or_default();
    let stored = contracts
        .iter()
        .flat_map(|c| c.weeks.iter())
        .find(|w| w.week_number == submission.week_number);
    submission.apply_stored_hours(stored);
    let total_hours = handle_panel_action(&submission);
    Ok(Json(TimesheetActionResponse {
        week_number: submission.week_number,
        total_hours,
        status: match submission.action {
            PanelAction::Save => "saved",
            PanelAction::Submit => "submitted",
        },
    }))
}

#[axum::debug_handler]
pub async fn profile(
    State(state): State<AppState>,
    session: SessionCookies,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    fetch_candidate(&store, &session).await;
    let view = build_profile(read_candidate(&store).await);
    Ok(page("profile", &session, view))
}

async fn form_options(store: &DataStore) -> FormOptions {
    tokio::join!(
        store.fetch_location(),
        store.fetch_currency(),
        store.fetch_country(),
    );
    FormOptions {
        locations: store.location.get().await.unwrap_or_default(),
        currencies: store.currency.get().await.unwrap_or_default(),
        countries: store.country.get().await.unwrap_or_default(),
    }
}

#[axum::debug_handler]
pub async fn edit_profile(
    State(state): State<AppState>,
    session: SessionCookies,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    let (_, options) = tokio::join!(fetch_candidate(&store, &session), form_options(&store));
    let view = build_edit_profile(read_candidate(&store).await, options, None);
    Ok(page("edit_profile", &session, view))
}

/// Saves the edited record. Any failure re-renders the form exactly as
/// submitted, with the error attached.
#[axum::debug_handler]
pub async fn submit_profile(
    State(state): State<AppState>,
    session: SessionCookies,
    Json(candidate): Json<SingleCandidateData>,
) -> Result<Response> {
    let payload = build_profile_edit_payload(&candidate);

    let outcome = match payload.validate() {
        Err(e) => {
            warn!(profile = %candidate.name, error = %e, "Profile edit rejected");
            Err(e.to_string())
        }
        Ok(()) => state
            .gateway
            .submit_profile_edit(candidate.name.clone(), payload)
            .await
            .map_err(|e| {
                error!(profile = %candidate.name, error = %e, "Profile edit failed");
                e.to_string()
            })
            .and_then(|response| {
                if response.is_success() {
                    Ok(())
                } else {
                    Err(PROFILE_UPDATE_FAILED.to_string())
                }
            }),
    };

    match outcome {
        Ok(()) => {
            info!(profile = %candidate.name, "Profile updated");
            Ok(Redirect::to("/profile").into_response())
        }
        Err(message) => {
            let store = DataStore::new(state.gateway.clone());
            let options = form_options(&store).await;
            let view: EditProfileView =
                build_edit_profile(Some(Some(candidate)), options, Some(message));
            Ok(page("edit_profile", &session, view).into_response())
        }
    }
}

async fn history_view(
    state: &AppState,
    session: &SessionCookies,
    selected: Option<String>,
    marked_latest: Option<String>,
    confirm_error: Option<String>,
) -> HistoryView {
    let store = DataStore::new(state.gateway.clone());
    fetch_candidate(&store, session).await;
    let current = read_candidate(&store).await;

    let profile_name = current
        .as_ref()
        .and_then(|c| c.as_ref())
        .map(|c| c.name.clone())
        .filter(|n| !n.is_empty());
    store.fetch_history(profile_name.as_deref()).await;

    let candidate = match selected.as_deref() {
        Some(version_id) => {
            store.fetch_single_candidate(version_id).await;
            read_candidate(&store).await
        }
        None => current,
    };

    build_history(HistoryInputs {
        versions: store.history.get().await,
        candidate,
        selected,
        marked_latest,
        confirm_error,
    })
}

#[axum::debug_handler]
pub async fn profile_history(
    State(state): State<AppState>,
    session: SessionCookies,
    Query(query): Query<HistoryPageQuery>,
) -> Result<impl IntoResponse> {
    let selected = query.version.filter(|v| !v.is_empty());
    let view = history_view(&state, &session, selected, None, None).await;
    Ok(page("profile_history", &session, view))
}

/// Marking a version as latest only changes what this page shows; the backend
/// is not told.
#[axum::debug_handler]
pub async fn set_latest_version(
    State(state): State<AppState>,
    session: SessionCookies,
    Json(payload): Json<SetLatestPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let view = match confirm_set_latest(&payload.confirmation) {
        Ok(()) => {
            info!(version = %payload.version_id, "Version marked as latest");
            let id = Some(payload.version_id);
            history_view(&state, &session, id.clone(), id, None).await
        }
        Err(message) => {
            let id = Some(payload.version_id);
            history_view(&state, &session, id, None, Some(message.to_string())).await
        }
    };
    Ok(page("profile_history", &session, view))
}

#[axum::debug_handler]
pub async fn interview(
    State(state): State<AppState>,
    session: SessionCookies,
    Query(query): Query<InterviewPageQuery>,
) -> Result<impl IntoResponse> {
    let interview_id = query
        .interview_slot
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::BadRequest("Missing interview_slot".into()))?;

    let store = DataStore::new(state.gateway.clone());
    store.fetch_interview_slot(&interview_id).await;
    let view = InterviewView {
        drawer: build_drawer(&interview_id, store.interview_slot.get().await, query.slot),
        toast: None,
        redirect: None,
    };
    Ok(page("interview", &session, view))
}

#[axum::debug_handler]
pub async fn accept_interview_slot(
    State(state): State<AppState>,
    session: SessionCookies,
    Json(payload): Json<SlotAcceptPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let outcome = state
        .gateway
        .accept_slot(payload.clone())
        .await
        .map_err(|e| {
            error!(interview = %payload.interview_name, error = %e, "Slot accept failed");
            e.to_string()
        });
    let accepted = matches!(&outcome, Ok(response) if response.is_success());
    let toast = accept_toast(&outcome);

    let store = DataStore::new(state.gateway.clone());
    store.fetch_interview_slot(&payload.interview_name).await;
    let selected = if accepted { None } else { Some(payload.slot_name) };
    let view = InterviewView {
        drawer: build_drawer(
            &payload.interview_name,
            store.interview_slot.get().await,
            selected,
        ),
        toast: Some(toast),
        redirect: accepted.then(|| "/dashboard".to_string()),
    };
    Ok(page("interview", &session, view))
}

#[axum::debug_handler]
pub async fn salary(
    State(state): State<AppState>,
    session: SessionCookies,
    Query(query): Query<SalaryPageQuery>,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_candidate_data().await;
    let view = build_salary(store.candidate_data.get().await, query.proposal.unwrap_or(0));
    Ok(page("salary", &session, view))
}

async fn proposal_for(
    state: &AppState,
    index: usize,
) -> Result<Proposal> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_candidate_data().await;
    store
        .candidate_data
        .get()
        .await
        .flatten()
        .and_then(|negotiation| negotiation.proposals.into_iter().nth(index))
        .ok_or_else(|| Error::BadRequest(format!("Unknown proposal {}", index)))
}

#[axum::debug_handler]
pub async fn accept_salary(
    State(state): State<AppState>,
    Json(payload): Json<ProposalActionPayload>,
) -> Result<impl IntoResponse> {
    let proposal = proposal_for(&state, payload.proposal).await?;
    accept_proposal(&proposal);
    Ok(Json(ProposalActionResponse {
        status: "accepted",
        version: proposal.version,
    }))
}

#[axum::debug_handler]
pub async fn clarify_salary(
    State(state): State<AppState>,
    Json(payload): Json<ProposalActionPayload>,
) -> Result<impl IntoResponse> {
    let proposal = proposal_for(&state, payload.proposal).await?;
    request_clarification(&proposal, payload.message.as_deref());
    Ok(Json(ProposalActionResponse {
        status: "clarification_requested",
        version: proposal.version,
    }))
}

#[axum::debug_handler]
pub async fn offer(
    State(state): State<AppState>,
    session: SessionCookies,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_order_data().await;
    let view = build_offer(store.order_data.get().await);
    Ok(page("offer", &session, view))
}

#[axum::debug_handler]
pub async fn job_detail(
    State(state): State<AppState>,
    session: SessionCookies,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse> {
    let store = DataStore::new(state.gateway.clone());
    store.fetch_job_detail(&job_id).await;
    let view = build_job_detail(store.job_detail.get().await);
    Ok(page("job", &session, view))
}
