use serde::{Deserialize, Serialize};

use crate::utils::flexible::{
    deserialize_number_or_zero, deserialize_opt_string, deserialize_string_or_blank as blank,
};

/// A recommended job as listed on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(rename = "JobTitle", deserialize_with = "blank")]
    pub job_title: String,
    #[serde(rename = "JobID", deserialize_with = "blank")]
    pub job_code: String,
    #[serde(rename = "Location", deserialize_with = "blank")]
    pub location: String,
    #[serde(deserialize_with = "blank")]
    pub currency: String,
    #[serde(rename = "Salary", deserialize_with = "blank")]
    pub salary: String,
    #[serde(deserialize_with = "blank")]
    pub pay_rate: String,
    #[serde(rename = "salaryPeriod", deserialize_with = "deserialize_opt_string")]
    pub salary_period: Option<String>,
    /// Non-numeric scores from the backend read as zero.
    #[serde(rename = "MatchScore", deserialize_with = "deserialize_number_or_zero")]
    pub match_score: f64,
    #[serde(deserialize_with = "blank")]
    pub status: String,
    #[serde(rename = "Status", deserialize_with = "blank")]
    pub display_status: String,
    #[serde(deserialize_with = "deserialize_opt_string")]
    pub rotation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationStatus {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "blank")]
    pub job_title: String,
    #[serde(deserialize_with = "blank")]
    pub job_id: String,
    #[serde(deserialize_with = "blank")]
    pub status: String,
    #[serde(deserialize_with = "blank")]
    pub date: String,
    #[serde(rename = "interviewDate", deserialize_with = "deserialize_opt_string")]
    pub interview_date: Option<String>,
    #[serde(rename = "interviewTime", deserialize_with = "deserialize_opt_string")]
    pub interview_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationStage {
    Shortlisted,
    Interview,
    SentInterest,
}

impl ApplicationStatus {
    pub fn stage(&self) -> Option<ApplicationStage> {
        match self.status.as_str() {
            "Shortlisted" => Some(ApplicationStage::Shortlisted),
            "Interview" => Some(ApplicationStage::Interview),
            "Sent Interest" => Some(ApplicationStage::SentInterest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewData {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "blank")]
    pub job_title: String,
    #[serde(deserialize_with = "blank")]
    pub job_id: String,
    #[serde(deserialize_with = "blank")]
    pub round: String,
    #[serde(deserialize_with = "blank")]
    pub date: String,
    #[serde(deserialize_with = "blank")]
    pub time: String,
    #[serde(deserialize_with = "blank")]
    pub time_zone: String,
    #[serde(deserialize_with = "blank")]
    pub interview_type: String,
    #[serde(deserialize_with = "blank")]
    pub interview_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actionable {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "blank")]
    pub job_title: String,
    #[serde(deserialize_with = "blank")]
    pub job_id: String,
    #[serde(deserialize_with = "blank")]
    pub round_info: String,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub slots: f64,
    #[serde(deserialize_with = "blank")]
    pub interview_type: String,
    #[serde(deserialize_with = "blank")]
    pub interview_mode: String,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub action_type: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    ChooseSlot,
    SalaryNegotiation,
    ReviewOffer,
    Other,
}

impl ActionKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ActionKind::ChooseSlot,
            2 => ActionKind::SalaryNegotiation,
            3 => ActionKind::ReviewOffer,
            _ => ActionKind::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::ChooseSlot => "Choose your slot",
            ActionKind::SalaryNegotiation => "Salary Negotiation",
            ActionKind::ReviewOffer => "Review Offer Letter",
            ActionKind::Other => "Take Action",
        }
    }
}

impl Actionable {
    pub fn kind(&self) -> ActionKind {
        ActionKind::from_code(self.action_type as i64)
    }
}
