//! Remote data gateway. One narrow call per resource against the portal's own
//! proxy routes; read failures are logged and collapse to an empty value.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::dto::candidate_dto::{ActionResponse, ProfileEditPayload, SlotAcceptPayload};
use crate::error::{Error, Result};
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

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn single_candidate(&self, user_id: String) -> Vec<CandidateEnvelope>;
    async fn recommended_jobs(&self) -> Vec<Job>;
    async fn application_status(&self, candidate_id: String) -> Vec<ApplicationStatus>;
    async fn scheduled_interviews(&self) -> Vec<InterviewData>;
    async fn actionables(&self) -> Vec<Actionable>;
    async fn history(&self, name: Option<String>) -> Vec<VersionItem>;
    async fn contract(&self) -> Vec<TimesheetData>;
    async fn salary(&self) -> Option<SalaryNegotiation>;
    async fn offer(&self) -> Option<OrderData>;
    async fn locations(&self) -> Vec<Location>;
    async fn currencies(&self) -> Vec<Currency>;
    async fn countries(&self) -> Vec<Country>;
    async fn interview_slot(&self, interview_id: String) -> Option<InterviewSlotData>;
    async fn job_detail(&self, job_id: String) -> Option<JobDetail>;
    async fn accept_slot(&self, payload: SlotAcceptPayload) -> Result<ActionResponse>;
    async fn submit_profile_edit(
        &self,
        profile_name: String,
        payload: ProfileEditPayload,
    ) -> Result<ActionResponse>;
}

#[derive(Clone)]
pub struct PortalGateway {
    client: Client,
    base_url: String,
}

impl PortalGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<JsonValue> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-store")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetches `path`, takes the value at `pointer` ("" for the whole body) and
    /// decodes it. A missing pointer target decodes from `null`.
    async fn load<T>(
        &self,
        resource: &'static str,
        path: &str,
        query: &[(&str, String)],
        pointer: &str,
    ) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let body = match self.fetch(path, query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(resource, error = %e, "Fetch failed, using empty value");
                return None;
            }
        };

        let payload = body.pointer(pointer).cloned().unwrap_or(JsonValue::Null);
        match serde_json::from_value::<T>(payload) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(resource, error = %e, "Unexpected payload shape, using empty value");
                None
            }
        }
    }

    async fn load_list<T>(
        &self,
        resource: &'static str,
        path: &str,
        query: &[(&str, String)],
        pointer: &str,
    ) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        self.load::<Option<Vec<T>>>(resource, path, query, pointer)
            .await
            .flatten()
            .unwrap_or_default()
    }

    async fn post_action<B>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<ActionResponse>
    where
        B: serde::Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(header::CACHE_CONTROL, "no-store")
            .query(query)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl DataSource for PortalGateway {
    async fn single_candidate(&self, user_id: String) -> Vec<CandidateEnvelope> {
        self.load::<CandidateEnvelope>(
            "single_candidate",
            "/api/candidate/get",
            &[("user_id", user_id)],
            "",
        )
        .await
        .into_iter()
        .collect()
    }

    async fn recommended_jobs(&self) -> Vec<Job> {
        self.load_list("recommended_jobs", "/api/candidate/recommended-jobs", &[], "/message/data")
            .await
    }

    async fn application_status(&self, candidate_id: String) -> Vec<ApplicationStatus> {
        self.load_list(
            "application_status",
            "/api/candidate/job-application",
            &[("candidate_id", candidate_id)],
            "/message/data",
        )
        .await
    }

    async fn scheduled_interviews(&self) -> Vec<InterviewData> {
        self.load_list("scheduled_interview", "/api/candidate/scheduled-interview", &[], "/data")
            .await
    }

    async fn actionables(&self) -> Vec<Actionable> {
        self.load_list("actionables", "/api/candidate/actionables", &[], "").await
    }

    async fn history(&self, name: Option<String>) -> Vec<VersionItem> {
        let query: Vec<(&str, String)> = name.into_iter().map(|n| ("name", n)).collect();
        self.load_list("history", "/api/candidate/history", &query, "/versions")
            .await
    }

    async fn contract(&self) -> Vec<TimesheetData> {
        self.load_list("contract", "/api/candidate/contract", &[], "").await
    }

    async fn salary(&self) -> Option<SalaryNegotiation> {
        self.load::<Option<SalaryNegotiation>>("salary", "/api/jobs/salary", &[], "")
            .await
            .flatten()
    }

    async fn offer(&self) -> Option<OrderData> {
        self.load::<Option<OrderData>>("offer", "/api/jobs/offer", &[], "")
            .await
            .flatten()
    }

    async fn locations(&self) -> Vec<Location> {
        self.load_list("location", "/api/masters/location", &[], "/data").await
    }

    async fn currencies(&self) -> Vec<Currency> {
        self.load_list("currency", "/api/masters/currency", &[], "/data").await
    }

    async fn countries(&self) -> Vec<Country> {
        self.load_list("country", "/api/masters/country", &[], "").await
    }

    async fn interview_slot(&self, interview_id: String) -> Option<InterviewSlotData> {
        self.load::<Option<InterviewSlotData>>(
            "interview_slot",
            "/api/candidate/slot_get",
            &[("interview_id", interview_id)],
            "/message/data",
        )
        .await
        .flatten()
    }

    async fn job_detail(&self, job_id: String) -> Option<JobDetail> {
        self.load::<Option<JobDetail>>(
            "job_detail",
            "/api/masters/singleget",
            &[("job_id", job_id)],
            "/data",
        )
        .await
        .flatten()
    }

    async fn accept_slot(&self, payload: SlotAcceptPayload) -> Result<ActionResponse> {
        self.post_action("/api/candidate/slot_accept", &[], &payload).await
    }

    async fn submit_profile_edit(
        &self,
        profile_name: String,
        payload: ProfileEditPayload,
    ) -> Result<ActionResponse> {
        self.post_action(
            "/api/candidate/profile_edit",
            &[("profile_name", profile_name)],
            &payload,
        )
        .await
    }
}
