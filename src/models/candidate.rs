use serde::{Deserialize, Serialize};

use crate::utils::flexible::{
    deserialize_number_or_zero, deserialize_opt_bool, deserialize_opt_number,
    deserialize_opt_string, deserialize_string_or_blank as blank,
};

/// Top-level profile record as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileList {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub state: Option<String>,
    pub current_location: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

/// Key skills arrive either as plain strings or as `{name}` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySkill {
    Name(String),
    Row { name: String },
}

impl KeySkill {
    pub fn into_name(self) -> String {
        match self {
            KeySkill::Name(name) | KeySkill::Row { name } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalProfileLink {
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRow {
    #[serde(deserialize_with = "blank")]
    pub key_skills: String,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub experience: f64,
    #[serde(deserialize_with = "blank")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRow {
    #[serde(deserialize_with = "blank")]
    pub title: String,
    #[serde(deserialize_with = "blank")]
    pub customer_company: String,
    #[serde(deserialize_with = "blank")]
    pub start_date: String,
    #[serde(deserialize_with = "blank")]
    pub end_date: String,
    #[serde(deserialize_with = "blank")]
    pub description: String,
    #[serde(deserialize_with = "blank")]
    pub roles_responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationRow {
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub organization: String,
    #[serde(deserialize_with = "blank")]
    pub certificate: String,
    #[serde(deserialize_with = "blank")]
    pub issued_date: String,
    #[serde(deserialize_with = "blank")]
    pub exp_date: String,
    #[serde(deserialize_with = "blank")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRow {
    #[serde(deserialize_with = "blank")]
    pub title: String,
    #[serde(deserialize_with = "blank")]
    pub institution: String,
    #[serde(deserialize_with = "blank")]
    pub graduation_year: String,
    #[serde(deserialize_with = "blank")]
    pub specialization: String,
    #[serde(deserialize_with = "blank")]
    pub score: String,
}

/// One immutable version of a candidate's professional profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileVersionData {
    pub key_skills: Option<Vec<KeySkill>>,
    pub external_profile_links: Option<Vec<ExternalProfileLink>>,
    pub skills_table: Option<Vec<SkillRow>>,
    pub projects_table: Option<Vec<ProjectRow>>,
    pub certification_table: Option<Vec<CertificationRow>>,
    pub education_qualifications: Option<Vec<EducationRow>>,
    pub preferred_places: Option<Vec<String>>,
    pub professional_summary: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string")]
    pub version: Option<String>,
    pub professional_title: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub experience_years: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub experience_months: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub current_salary: Option<f64>,
    pub current_salary_currency: Option<String>,
    pub nationality: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_bool")]
    pub open_to_world: Option<bool>,
    #[serde(deserialize_with = "deserialize_opt_bool")]
    pub accept_country_opportunities: Option<bool>,
}

/// `{profile, profile_version}` as returned inside the backend's `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidatePayload {
    pub status: Option<String>,
    pub profile: Option<ProfileList>,
    pub profile_version: Option<ProfileVersionData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateEnvelope {
    pub message: CandidatePayload,
}

/// Flat candidate record every page renders from. All fields are filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleCandidateData {
    pub name: String,
    pub full_name: String,
    pub state: String,
    pub current_location: String,
    pub gender: String,
    pub date_of_birth: String,
    pub contact_no: String,
    pub email: String,
    pub profile_image: String,
    pub key_skills: Vec<String>,
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
    pub profile_completion: u8,
    pub profile: String,
    pub percent_completion: u8,
    pub status: String,
    pub experience: String,
    pub open_to_world: bool,
    pub accept_country_opportunities: bool,
}
