pub mod config;
pub mod dto;
pub mod error;
pub mod mappers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::config::Config;
use crate::services::{
    backend_service::BackendService,
    gateway_service::{DataSource, PortalGateway},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: BackendService,
    pub gateway: Arc<dyn DataSource>,
}

impl AppState {
    /// Pages read through the portal's own proxy routes, at `portal_base_url`.
    pub fn from_config(config: Config) -> Self {
        let backend = BackendService::new(&config);
        let gateway = PortalGateway::new(config.portal_base_url.clone());
        Self {
            config: Arc::new(config),
            backend,
            gateway: Arc::new(gateway),
        }
    }

    pub fn with_gateway(config: Config, gateway: Arc<dyn DataSource>) -> Self {
        Self {
            backend: BackendService::new(&config),
            config: Arc::new(config),
            gateway,
        }
    }
}

pub fn api_router(state: &AppState) -> Router<AppState> {
    // Multipart framing on top of the file itself.
    let upload_limit = state.config.max_upload_mb * 1024 * 1024 + 64 * 1024;

    Router::new()
        .route("/api/candidate/get", get(routes::candidate::get_candidate))
        .route(
            "/api/candidate/recommended-jobs",
            get(routes::candidate::recommended_jobs),
        )
        .route(
            "/api/candidate/job-application",
            get(routes::candidate::job_application),
        )
        .route(
            "/api/candidate/scheduled-interview",
            get(routes::candidate::scheduled_interview),
        )
        .route("/api/candidate/actionables", get(routes::candidate::actionables))
        .route("/api/candidate/history", get(routes::candidate::history))
        .route("/api/candidate/contract", get(routes::candidate::contract))
        .route("/api/candidate/slot_get", get(routes::candidate::slot_get))
        .route("/api/candidate/slot_accept", post(routes::candidate::slot_accept))
        .route("/api/candidate/profile_edit", post(routes::candidate::profile_edit))
        .route(
            "/api/candidate/file_upload",
            post(routes::candidate::file_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/jobs/salary", get(routes::jobs::salary))
        .route("/api/jobs/offer", get(routes::jobs::offer))
        .route("/api/jobs/info/summary", get(routes::jobs::job_summary))
        .route("/api/masters/location", get(routes::masters::location))
        .route("/api/masters/currency", get(routes::masters::currency))
        .route("/api/masters/country", get(routes::masters::country))
        .route("/api/masters/keyskills", get(routes::masters::key_skills))
        .route("/api/masters/singleget", get(routes::masters::single_job))
        .route("/api/auth/login", post(routes::auth::login))
}

pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/dashboard", get(routes::pages::dashboard))
        .route("/dashboard/contract", get(routes::pages::contract))
        .route(
            "/dashboard/contract/timesheet",
            post(routes::pages::timesheet_action),
        )
        .route("/profile", get(routes::pages::profile))
        .route(
            "/profile/edit",
            get(routes::pages::edit_profile).post(routes::pages::submit_profile),
        )
        .route("/profile-history", get(routes::pages::profile_history))
        .route(
            "/profile-history/latest",
            post(routes::pages::set_latest_version),
        )
        .route("/interview", get(routes::pages::interview))
        .route("/interview/accept", post(routes::pages::accept_interview_slot))
        .route("/salary", get(routes::pages::salary))
        .route("/salary/accept", post(routes::pages::accept_salary))
        .route("/salary/clarify", post(routes::pages::clarify_salary))
        .route("/offer", get(routes::pages::offer))
        .route("/jobs/:job_id", get(routes::pages::job_detail))
        .layer(axum::middleware::from_fn(
            middleware::session::redirect_direct_entry,
        ))
}

/// Full application router, without the transport layers `main` adds.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .merge(api_router(&state))
        .merge(page_router())
        .with_state(state)
}
