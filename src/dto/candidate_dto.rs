use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::candidate::{
    CertificationRow, EducationRow, ExternalProfileLink, ProjectRow, SkillRow,
};
use crate::utils::validation::check_contact_number;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendedJobsQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobApplicationQuery {
    pub candidate_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionablesQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotQuery {
    pub interview_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileEditQuery {
    pub profile_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlotAcceptPayload {
    #[validate(length(min = 1))]
    pub interview_name: String,
    #[validate(length(min = 1))]
    pub slot_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionMessage {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// `{message: {status, message}}` as returned by the backend's write endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    pub message: ActionMessage,
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        self.message
            .status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("success"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillName {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileEditProfile {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub current_location: String,
    #[validate(custom(function = "validate_contact_no"))]
    pub contact_no: String,
    #[validate(email)]
    pub email: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileEditVersion {
    pub key_skills: Vec<SkillName>,
    pub external_profile_links: Vec<ExternalProfileLink>,
    pub skills_table: Vec<SkillRow>,
    pub projects_table: Vec<ProjectRow>,
    pub certification_table: Vec<CertificationRow>,
    pub education_qualifications: Vec<EducationRow>,
    pub preferred_places: Vec<String>,
    pub professional_summary: String,
    pub version: String,
    pub professional_title: String,
    pub experience_years: f64,
    pub experience_months: f64,
    pub current_salary: f64,
    pub current_salary_currency: String,
    pub nationality: String,
}

/// Body posted to `profile_edit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileEditPayload {
    #[validate(nested)]
    pub profile: ProfileEditProfile,
    pub profile_version: ProfileEditVersion,
}

/// Blank contact numbers are allowed; anything else must be 10 to 15 digits.
fn validate_contact_no(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    check_contact_number(value).map_err(|_| ValidationError::new("contact_no"))
}
