//! Per-page application state. Each slice holds the last value its trigger
//! fetched; nothing is shared between page loads.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{
    candidate::CandidateEnvelope,
    dashboard::{Actionable, ApplicationStatus, InterviewData, Job},
    history::VersionItem,
    interview::InterviewSlotData,
    job::JobDetail,
    masters::{Country, Currency, Location},
    offer::OrderData,
    salary::SalaryNegotiation,
    timesheet::TimesheetData,
};
use crate::services::gateway_service::DataSource;

/// A slice is `None` until its first fetch completes.
pub struct Slice<T> {
    value: RwLock<Option<T>>,
}

impl<T: Clone> Slice<T> {
    fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    pub async fn get(&self) -> Option<T> {
        self.value.read().await.clone()
    }

    async fn set(&self, value: T) {
        *self.value.write().await = Some(value);
    }
}

pub struct DataStore {
    source: Arc<dyn DataSource>,
    pub single_candidate: Slice<Vec<CandidateEnvelope>>,
    pub recommended_jobs: Slice<Vec<Job>>,
    pub application_status: Slice<Vec<ApplicationStatus>>,
    pub scheduled_interview: Slice<Vec<InterviewData>>,
    pub actionables: Slice<Vec<Actionable>>,
    pub history: Slice<Vec<VersionItem>>,
    pub contract: Slice<Vec<TimesheetData>>,
    pub candidate_data: Slice<Option<SalaryNegotiation>>,
    pub order_data: Slice<Option<OrderData>>,
    pub interview_slot: Slice<Option<InterviewSlotData>>,
    pub job_detail: Slice<Option<JobDetail>>,
    pub location: Slice<Vec<Location>>,
    pub currency: Slice<Vec<Currency>>,
    pub country: Slice<Vec<Country>>,
}

impl DataStore {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            single_candidate: Slice::new(),
            recommended_jobs: Slice::new(),
            application_status: Slice::new(),
            scheduled_interview: Slice::new(),
            actionables: Slice::new(),
            history: Slice::new(),
            contract: Slice::new(),
            candidate_data: Slice::new(),
            order_data: Slice::new(),
            interview_slot: Slice::new(),
            job_detail: Slice::new(),
            location: Slice::new(),
            currency: Slice::new(),
            country: Slice::new(),
        }
    }

    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    pub async fn fetch_single_candidate(&self, user_id: &str) {
        let value = self.source.single_candidate(user_id.to_string()).await;
        self.single_candidate.set(value).await;
    }

    pub async fn fetch_recommended_jobs(&self) {
        let value = self.source.recommended_jobs().await;
        self.recommended_jobs.set(value).await;
    }

    pub async fn fetch_application_status(&self, candidate_id: &str) {
        let value = self.source.application_status(candidate_id.to_string()).await;
        self.application_status.set(value).await;
    }

    pub async fn fetch_scheduled_interview(&self) {
        let value = self.source.scheduled_interviews().await;
        self.scheduled_interview.set(value).await;
    }

    pub async fn fetch_actionables(&self) {
        let value = self.source.actionables().await;
        self.actionables.set(value).await;
    }

    pub async fn fetch_history(&self, name: Option<&str>) {
        let value = self.source.history(name.map(str::to_string)).await;
        self.history.set(value).await;
    }

    pub async fn fetch_contract(&self) {
        let value = self.source.contract().await;
        self.contract.set(value).await;
    }

    pub async fn fetch_candidate_data(&self) {
        let value = self.source.salary().await;
        self.candidate_data.set(value).await;
    }

    pub async fn fetch_order_data(&self) {
        let value = self.source.offer().await;
        self.order_data.set(value).await;
    }

    pub async fn fetch_interview_slot(&self, interview_id: &str) {
        let value = self.source.interview_slot(interview_id.to_string()).await;
        self.interview_slot.set(value).await;
    }

    pub async fn fetch_job_detail(&self, job_id: &str) {
        let value = self.source.job_detail(job_id.to_string()).await;
        self.job_detail.set(value).await;
    }

    pub async fn fetch_location(&self) {
        let value = self.source.locations().await;
        self.location.set(value).await;
    }

    pub async fn fetch_currency(&self) {
        let value = self.source.currencies().await;
        self.currency.set(value).await;
    }

    pub async fn fetch_country(&self) {
        let value = self.source.countries().await;
        self.country.set(value).await;
    }
}
