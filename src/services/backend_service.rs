use reqwest::{header, Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::dto::auth_dto::{BackendLoginResponse, LoginPayload};
use crate::error::{Error, Result};

/// Query for endpoints that take none.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// Backend resources the proxy routes forward to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEndpoint {
    Candidate,
    RecommendedJobs,
    JobApplication,
    ScheduledInterview,
    Actionables,
    History,
    Contract,
    SlotGet,
    SlotAccept,
    ProfileEdit,
    Salary,
    Offer,
    JobCandidateCount(String),
    Location,
    Currency,
    Country,
    KeySkills,
    SingleJob,
    Login,
    UploadFile,
}

impl BackendEndpoint {
    pub fn path(&self) -> String {
        match self {
            BackendEndpoint::Candidate => "/api/candidate/get".into(),
            BackendEndpoint::RecommendedJobs => "/api/candidate/recommended-jobs".into(),
            BackendEndpoint::JobApplication => "/api/candidate/job-application".into(),
            BackendEndpoint::ScheduledInterview => "/api/candidate/scheduled-interview".into(),
            BackendEndpoint::Actionables => "/api/candidate/actionables".into(),
            BackendEndpoint::History => "/api/candidate/history".into(),
            BackendEndpoint::Contract => "/api/candidate/contract".into(),
            BackendEndpoint::SlotGet => "/api/candidate/slot_get".into(),
            BackendEndpoint::SlotAccept => "/api/candidate/slot_accept".into(),
            BackendEndpoint::ProfileEdit => "/api/candidate/profile_edit".into(),
            BackendEndpoint::Salary => "/api/jobs/salary".into(),
            BackendEndpoint::Offer => "/api/jobs/offer".into(),
            BackendEndpoint::JobCandidateCount(job_id) => {
                format!("/api/job/{}/candidates/count", job_id)
            }
            BackendEndpoint::Location => "/api/masters/location".into(),
            BackendEndpoint::Currency => "/api/masters/currency".into(),
            BackendEndpoint::Country => "/api/masters/country".into(),
            BackendEndpoint::KeySkills => "/api/masters/keyskills".into(),
            BackendEndpoint::SingleJob => "/api/masters/singleget".into(),
            BackendEndpoint::Login => "/api/method/login".into(),
            BackendEndpoint::UploadFile => "/api/method/upload_file".into(),
        }
    }

    /// Resources still served by the mock API rather than the main backend.
    fn is_mocked(&self) -> bool {
        matches!(
            self,
            BackendEndpoint::Actionables
                | BackendEndpoint::Salary
                | BackendEndpoint::Offer
                | BackendEndpoint::JobCandidateCount(_)
        )
    }
}

/// A file received from the browser, ready to be re-posted to the backend.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub response: BackendLoginResponse,
    pub set_cookies: Vec<String>,
}

#[derive(Clone)]
pub struct BackendService {
    client: Client,
    base_url: String,
    mock_url: String,
    api_token: Option<String>,
}

impl BackendService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend_url.clone(),
            mock_url: config.mock_api_url.clone(),
            api_token: config.backend_api_token.clone(),
        }
    }

    fn url(&self, endpoint: &BackendEndpoint) -> String {
        let base = if endpoint.is_mocked() {
            &self.mock_url
        } else {
            &self.base_url
        };
        format!("{}{}", base, endpoint.path())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(header::AUTHORIZATION, format!("token {}", token)),
            None => request,
        }
    }

    #[instrument(skip(self, query))]
    pub async fn get<Q>(&self, endpoint: BackendEndpoint, query: &Q) -> Result<JsonValue>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(&endpoint);
        let response = self
            .authorize(self.client.get(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;
        Self::read_json(&url, response).await
    }

    #[instrument(skip(self, query, body))]
    pub async fn post<Q, B>(&self, endpoint: BackendEndpoint, query: &Q, body: &B) -> Result<JsonValue>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(&endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::read_json(&url, response).await
    }

    /// Re-posts a file to the backend's `upload_file` method as a private-off,
    /// unattached `File` document.
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name))]
    pub async fn upload_file(&self, upload: FileUpload) -> Result<JsonValue> {
        let url = self.url(&BackendEndpoint::UploadFile);
        let mut part = reqwest::multipart::Part::bytes(upload.data)
            .file_name(upload.file_name.clone());
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("is_private", "0")
            .text("doctype", "File")
            .text("docname", "New")
            .text("file_name", upload.file_name);

        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(&url, response).await
    }

    /// Login answers are read whatever the status code, since a rejected login
    /// still carries the backend's message.
    #[instrument(skip(self, payload), fields(usr = %payload.usr))]
    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginOutcome> {
        let url = self.url(&BackendEndpoint::Login);
        let response = self.client.post(&url).json(payload).send().await?;

        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect::<Vec<_>>();

        let status = response.status();
        let text = response.text().await?;
        let parsed = serde_json::from_str::<BackendLoginResponse>(&text);
        let response = match parsed {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(Error::Upstream {
                    status: status.as_u16(),
                    body: text,
                })
            }
            Err(e) => return Err(e.into()),
        };

        info!(logged_in = response.is_logged_in(), "Backend login answered");
        Ok(LoginOutcome {
            response,
            set_cookies,
        })
    }

    async fn read_json(url: &str, response: Response) -> Result<JsonValue> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Backend {} returned {}", url, status);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
