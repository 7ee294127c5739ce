//! Conversions between the backend's nested candidate payload and the flat
//! record the pages render and edit.

use crate::dto::candidate_dto::{
    ProfileEditPayload, ProfileEditProfile, ProfileEditVersion, SkillName,
};
use crate::models::candidate::{
    CandidateEnvelope, CandidatePayload, KeySkill, ProfileList, ProfileVersionData,
    SingleCandidateData,
};

pub const PROFILE_COMPLETION: u8 = 100;
pub const DEFAULT_STATUS: &str = "Draft";

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn or_default_status(state: &str) -> String {
    if state.is_empty() {
        DEFAULT_STATUS.to_string()
    } else {
        state.to_string()
    }
}

pub fn experience_label(years: f64, months: f64) -> String {
    format!("{} Years {} Months", years, months)
}

pub fn convert_candidate_data(payload: CandidatePayload) -> SingleCandidateData {
    let profile = payload.profile.unwrap_or_default();
    let version = payload.profile_version.unwrap_or_default();
    convert_parts(profile, version)
}

/// The first envelope of a fetched slice, mapped. `None` when nothing loaded.
pub fn first_candidate(envelopes: &[CandidateEnvelope]) -> Option<SingleCandidateData> {
    envelopes
        .first()
        .map(|envelope| convert_candidate_data(envelope.message.clone()))
}

fn convert_parts(profile: ProfileList, version: ProfileVersionData) -> SingleCandidateData {
    let state = text(profile.state);
    let name = text(profile.name);
    let experience_years = version.experience_years.unwrap_or(0.0);
    let experience_months = version.experience_months.unwrap_or(0.0);

    SingleCandidateData {
        profile: name.clone(),
        name,
        full_name: text(profile.full_name),
        status: or_default_status(&state),
        state,
        current_location: text(profile.current_location),
        gender: text(profile.gender),
        date_of_birth: text(profile.date_of_birth),
        contact_no: text(profile.contact_no),
        email: text(profile.email),
        profile_image: text(profile.profile_image),
        key_skills: version
            .key_skills
            .unwrap_or_default()
            .into_iter()
            .map(KeySkill::into_name)
            .collect(),
        external_profile_links: version.external_profile_links.unwrap_or_default(),
        skills_table: version.skills_table.unwrap_or_default(),
        projects_table: version.projects_table.unwrap_or_default(),
        certification_table: version.certification_table.unwrap_or_default(),
        education_qualifications: version.education_qualifications.unwrap_or_default(),
        preferred_places: version.preferred_places.unwrap_or_default(),
        professional_summary: text(version.professional_summary),
        version: text(version.version),
        professional_title: text(version.professional_title),
        experience: experience_label(experience_years, experience_months),
        experience_years,
        experience_months,
        current_salary: version.current_salary.unwrap_or(0.0),
        current_salary_currency: text(version.current_salary_currency),
        nationality: text(version.nationality),
        profile_completion: PROFILE_COMPLETION,
        percent_completion: PROFILE_COMPLETION,
        open_to_world: version.open_to_world.unwrap_or(false),
        accept_country_opportunities: version.accept_country_opportunities.unwrap_or(false),
    }
}

/// Flat record back into the nested body `profile_edit` expects.
pub fn build_profile_edit_payload(candidate: &SingleCandidateData) -> ProfileEditPayload {
    ProfileEditPayload {
        profile: ProfileEditProfile {
            name: candidate.name.clone(),
            full_name: candidate.full_name.clone(),
            gender: candidate.gender.clone(),
            date_of_birth: candidate.date_of_birth.clone(),
            current_location: candidate.current_location.clone(),
            contact_no: candidate.contact_no.clone(),
            email: candidate.email.clone(),
            profile_image: candidate.profile_image.clone(),
        },
        profile_version: ProfileEditVersion {
            key_skills: candidate
                .key_skills
                .iter()
                .map(|name| SkillName { name: name.clone() })
                .collect(),
            external_profile_links: candidate.external_profile_links.clone(),
            skills_table: candidate.skills_table.clone(),
            projects_table: candidate.projects_table.clone(),
            certification_table: candidate.certification_table.clone(),
            education_qualifications: candidate.education_qualifications.clone(),
            preferred_places: candidate.preferred_places.clone(),
            professional_summary: candidate.professional_summary.clone(),
            version: candidate.version.clone(),
            professional_title: candidate.professional_title.clone(),
            experience_years: candidate.experience_years,
            experience_months: candidate.experience_months,
            current_salary: candidate.current_salary,
            current_salary_currency: candidate.current_salary_currency.clone(),
            nationality: candidate.nationality.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> CandidatePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn fills_every_missing_field() {
        let candidate = convert_candidate_data(payload(json!({
            "profile": {"name": "Alice"},
            "profile_version": {"experience_years": 3}
        })));

        assert_eq!(candidate.name, "Alice");
        assert_eq!(candidate.profile, "Alice");
        assert_eq!(candidate.experience, "3 Years 0 Months");
        assert_eq!(candidate.status, "Draft");
        assert!(candidate.key_skills.is_empty());
        assert!(candidate.projects_table.is_empty());
        assert_eq!(candidate.email, "");
        assert_eq!(candidate.current_salary, 0.0);
        assert!(!candidate.open_to_world);
        assert_eq!(candidate.profile_completion, 100);
        assert_eq!(candidate.percent_completion, 100);
    }

    #[test]
    fn empty_payload_maps_to_defaults() {
        let candidate = convert_candidate_data(CandidatePayload::default());
        assert_eq!(candidate.name, "");
        assert_eq!(candidate.experience, "0 Years 0 Months");
        assert_eq!(candidate.status, "Draft");
        assert_eq!(experience_label(2.5, 1.0), "2.5 Years 1 Months");
    }

    #[test]
    fn mapping_is_idempotent() {
        let raw = payload(json!({
            "profile": {"name": "CAND-0001", "state": "Published", "email": "a@b.co"},
            "profile_version": {"key_skills": ["Rust"], "experience_months": 7}
        }));
        let first = convert_candidate_data(raw.clone());
        let second = convert_candidate_data(raw);
        assert_eq!(first, second);
        assert_eq!(first.status, "Published");
        assert_eq!(first.state, "Published");
    }

    #[test]
    fn edit_payload_wraps_key_skills() {
        let candidate = SingleCandidateData {
            name: "CAND-0001".into(),
            key_skills: vec!["Rust".into(), "SQL".into()],
            ..SingleCandidateData::default()
        };
        let body = serde_json::to_value(build_profile_edit_payload(&candidate)).unwrap();
        assert_eq!(
            body["profile_version"]["key_skills"],
            json!([{"name": "Rust"}, {"name": "SQL"}])
        );
        assert_eq!(body["profile"]["name"], json!("CAND-0001"));
    }
}
