use serde::{Deserialize, Serialize};

use crate::utils::flexible::{deserialize_opt_number, deserialize_string_or_blank as blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    #[serde(deserialize_with = "blank")]
    pub fname: String,
    #[serde(deserialize_with = "blank")]
    pub min_experience: String,
    #[serde(deserialize_with = "blank")]
    pub max_experience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageRequirement {
    #[serde(deserialize_with = "blank")]
    pub fname: String,
    #[serde(deserialize_with = "blank")]
    pub read: String,
    #[serde(deserialize_with = "blank")]
    pub speak: String,
    #[serde(deserialize_with = "blank")]
    pub write: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationRequirement {
    pub certification: Option<String>,
}

/// Job opening detail behind a recommended job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDetail {
    pub name: Option<String>,
    pub position_start_date: Option<String>,
    pub position_est_end_date: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub no_of_resources: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub min_bill_rate: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub max_bill_rate: Option<f64>,
    pub billing_currency: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub work_days_per_week: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub work_hours_per_day: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub rotation_on_weeks: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub rotation_off_weeks: Option<f64>,
    pub project: Option<String>,
    pub project_type: Option<String>,
    pub responsibilities: Option<String>,
    pub qualification: Option<Vec<String>>,
    pub certifications: Option<Vec<CertificationRequirement>>,
    pub visa_requirements: Option<String>,
    pub key_skills: Option<Vec<String>>,
    pub skills_and_experience: Option<Vec<Requirement>>,
    #[serde(rename = "tools_familarity")]
    pub tools_familiarity: Option<Vec<Requirement>>,
    pub language_requirement: Option<Vec<LanguageRequirement>>,
}

impl JobDetail {
    pub fn is_blank(&self) -> bool {
        *self == JobDetail::default()
    }
}
