use serde::Serialize;

use super::dashboard::{profile_section, ProfileCard};
use super::Section;
use crate::models::candidate::{
    CertificationRow, EducationRow, ExternalProfileLink, ProjectRow, SingleCandidateData,
    SkillRow,
};
use crate::models::masters::{Country, Currency, Location};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub title: String,
    pub customer_company: String,
    pub period: String,
    pub description: String,
    pub roles_responsibilities: String,
}

impl From<&ProjectRow> for ProjectEntry {
    fn from(row: &ProjectRow) -> Self {
        let period = if row.end_date.is_empty() {
            row.start_date.clone()
        } else {
            format!("{} - {}", row.start_date, row.end_date)
        };
        Self {
            title: row.title.clone(),
            customer_company: row.customer_company.clone(),
            period: period.trim().to_string(),
            description: row.description.clone(),
            roles_responsibilities: row.roles_responsibilities.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationEntry {
    pub name: String,
    pub organization: String,
    pub certificate: String,
    pub validity: String,
    pub url: String,
}

impl From<&CertificationRow> for CertificationEntry {
    fn from(row: &CertificationRow) -> Self {
        Self {
            name: row.name.clone(),
            organization: row.organization.clone(),
            certificate: row.certificate.clone(),
            validity: format!("{} - {}", row.issued_date, row.exp_date),
            url: row.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalDetails {
    pub title: String,
    pub salary_label: String,
    pub summary: String,
    pub experience: String,
    pub version: String,
    pub status: String,
    pub links: Vec<ExternalProfileLink>,
    pub skills: Vec<SkillRow>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub education: Vec<EducationRow>,
    pub preferred_places: Vec<String>,
    pub open_to_world: bool,
    pub accept_country_opportunities: bool,
}

impl From<&SingleCandidateData> for ProfessionalDetails {
    fn from(candidate: &SingleCandidateData) -> Self {
        let salary = if candidate.current_salary_currency.is_empty() {
            candidate.current_salary.to_string()
        } else {
            format!("{} {}", candidate.current_salary_currency, candidate.current_salary)
        };
        Self {
            title: candidate.professional_title.clone(),
            salary_label: format!("Current Salary/month : {}", salary),
            summary: candidate.professional_summary.clone(),
            experience: candidate.experience.clone(),
            version: candidate.version.clone(),
            status: candidate.status.clone(),
            links: candidate.external_profile_links.clone(),
            skills: candidate.skills_table.clone(),
            projects: candidate.projects_table.iter().map(ProjectEntry::from).collect(),
            certifications: candidate
                .certification_table
                .iter()
                .map(CertificationEntry::from)
                .collect(),
            education: candidate.education_qualifications.clone(),
            preferred_places: candidate.preferred_places.clone(),
            open_to_world: candidate.open_to_world,
            accept_country_opportunities: candidate.accept_country_opportunities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub personal: Section<ProfileCard>,
    pub professional: Section<ProfessionalDetails>,
}

pub fn build_profile(candidate: Option<Option<SingleCandidateData>>) -> ProfileView {
    let professional = match &candidate {
        None => Section::Loading,
        Some(None) => Section::empty(super::dashboard::NO_PROFILE),
        Some(Some(c)) => Section::Ready(ProfessionalDetails::from(c)),
    };
    ProfileView {
        personal: profile_section(candidate),
        professional,
    }
}

/// Lookup lists the edit form offers in its dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormOptions {
    pub locations: Vec<Location>,
    pub currencies: Vec<Currency>,
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditProfileView {
    pub form: Section<SingleCandidateData>,
    pub options: FormOptions,
    pub error: Option<String>,
    pub history_href: &'static str,
}

pub fn build_edit_profile(
    candidate: Option<Option<SingleCandidateData>>,
    options: FormOptions,
    error: Option<String>,
) -> EditProfileView {
    let form = match candidate {
        None => Section::Loading,
        Some(None) => Section::empty(super::dashboard::NO_PROFILE),
        Some(Some(c)) => Section::Ready(c),
    };
    EditProfileView {
        form,
        options,
        error,
        history_href: "/profile-history",
    }
}
