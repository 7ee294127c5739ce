use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSummaryQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationQuery {
    pub page: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SingleJobQuery {
    pub job_id: Option<String>,
}
