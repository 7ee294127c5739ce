use serde::Serialize;

use super::{MaskedText, Section};
use crate::models::{
    candidate::SingleCandidateData,
    dashboard::{ActionKind, Actionable, ApplicationStage, ApplicationStatus, InterviewData, Job},
};
use crate::utils::format::PLACEHOLDER_AVATAR;
use crate::utils::time::format_date;

pub const NO_PROFILE: &str = "Failed to load profile";
pub const NO_JOBS: &str = "No jobs available";
pub const NO_APPLICATIONS: &str = "No applications found";
pub const NO_INTERVIEWS: &str = "No interviews scheduled";
pub const NO_ACTIONABLES: &str = "No actionables available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub full_name: String,
    pub initial: String,
    pub avatar: String,
    pub completion_label: String,
    pub email: MaskedText,
    pub contact_no: MaskedText,
    pub date_of_birth: MaskedText,
    pub current_location: MaskedText,
    pub nationality: MaskedText,
    pub key_skills: Vec<String>,
    pub view_href: &'static str,
}

impl From<&SingleCandidateData> for ProfileCard {
    fn from(candidate: &SingleCandidateData) -> Self {
        let avatar = if candidate.profile_image.is_empty() {
            PLACEHOLDER_AVATAR.to_string()
        } else {
            candidate.profile_image.clone()
        };

        Self {
            name: candidate.name.clone(),
            full_name: candidate.full_name.clone(),
            initial: candidate.name.chars().next().map(String::from).unwrap_or_default(),
            avatar,
            completion_label: format!("{}% Completed", candidate.profile_completion),
            email: MaskedText::new(&candidate.email, 3),
            contact_no: MaskedText::new(&candidate.contact_no, 3),
            date_of_birth: MaskedText::new(&candidate.date_of_birth, 2),
            current_location: MaskedText::new(&candidate.current_location, 2),
            nationality: MaskedText::new(&candidate.nationality, 2),
            key_skills: candidate.key_skills.clone(),
            view_href: "/profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub job_code: String,
    pub location: String,
    pub salary: String,
    pub match_score: u8,
    pub rotation: Option<String>,
    pub view_href: String,
}

impl From<Job> for JobCard {
    fn from(job: Job) -> Self {
        let rotation = job.rotation.filter(|r| !r.is_empty() && r != "None");
        Self {
            view_href: format!("/jobs/{}", job.job_code),
            id: job.id,
            title: job.job_title,
            job_code: job.job_code,
            location: job.location,
            salary: job.salary,
            match_score: job.match_score.clamp(0.0, 100.0).round() as u8,
            rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCard {
    pub id: String,
    pub job_title: String,
    pub job_id: String,
    pub status: String,
    pub summary: String,
}

impl From<ApplicationStatus> for StatusCard {
    fn from(status: ApplicationStatus) -> Self {
        let prefix = match status.stage() {
            Some(ApplicationStage::Shortlisted) => "Shortlisted on",
            Some(ApplicationStage::Interview) => "Interview on",
            _ => "Sent interest on",
        };
        Self {
            summary: format!("{} {}", prefix, status.date),
            id: status.id,
            job_title: status.job_title,
            job_id: status.job_id,
            status: status.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewCard {
    pub id: String,
    pub job_title: String,
    pub job_id: String,
    pub round: String,
    pub date: String,
    pub time: String,
    pub time_zone: String,
    pub interview_type: String,
    pub interview_mode: String,
}

impl From<InterviewData> for InterviewCard {
    fn from(interview: InterviewData) -> Self {
        Self {
            date: format_date(&interview.date),
            id: interview.id,
            job_title: interview.job_title,
            job_id: interview.job_id,
            round: interview.round,
            time: interview.time,
            time_zone: interview.time_zone,
            interview_type: interview.interview_type,
            interview_mode: interview.interview_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionableCard {
    pub id: String,
    pub job_title: String,
    pub job_id: String,
    pub round_info: String,
    pub slots: Option<u32>,
    pub interview_type: String,
    pub interview_mode: String,
    pub action: ActionKind,
    pub action_label: &'static str,
    /// Where the action button leads; `None` for actions with no page.
    pub href: Option<String>,
}

impl From<Actionable> for ActionableCard {
    fn from(actionable: Actionable) -> Self {
        let action = actionable.kind();
        let href = match action {
            ActionKind::ChooseSlot => Some(format!("/interview?interview_slot={}", actionable.id)),
            ActionKind::SalaryNegotiation => Some("/salary".to_string()),
            ActionKind::ReviewOffer => Some("/offer".to_string()),
            ActionKind::Other => None,
        };
        Self {
            slots: (actionable.slots > 0.0).then_some(actionable.slots as u32),
            action_label: action.label(),
            action,
            href,
            id: actionable.id,
            job_title: actionable.job_title,
            job_id: actionable.job_id,
            round_info: actionable.round_info,
            interview_type: actionable.interview_type,
            interview_mode: actionable.interview_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub profile: Section<ProfileCard>,
    pub jobs: Section<Vec<JobCard>>,
    pub applications: Section<Vec<StatusCard>>,
    pub interviews: Section<Vec<InterviewCard>>,
    pub actionables: Section<Vec<ActionableCard>>,
    /// Set when the page was opened to pick an interview slot.
    pub interview_slot: Option<String>,
}

#[derive(Debug, Default)]
pub struct DashboardInputs {
    pub candidate: Option<Option<SingleCandidateData>>,
    pub jobs: Option<Vec<Job>>,
    pub applications: Option<Vec<ApplicationStatus>>,
    pub interviews: Option<Vec<InterviewData>>,
    pub actionables: Option<Vec<Actionable>>,
    pub interview_slot: Option<String>,
}

pub fn profile_section(candidate: Option<Option<SingleCandidateData>>) -> Section<ProfileCard> {
    match candidate {
        None => Section::Loading,
        Some(None) => Section::empty(NO_PROFILE),
        Some(Some(candidate)) => Section::Ready(ProfileCard::from(&candidate)),
    }
}

pub fn build_dashboard(inputs: DashboardInputs) -> DashboardView {
    DashboardView {
        profile: profile_section(inputs.candidate),
        jobs: Section::from_list(inputs.jobs, NO_JOBS, JobCard::from),
        applications: Section::from_list(inputs.applications, NO_APPLICATIONS, StatusCard::from),
        interviews: Section::from_list(inputs.interviews, NO_INTERVIEWS, InterviewCard::from),
        actionables: Section::from_list(inputs.actionables, NO_ACTIONABLES, ActionableCard::from),
        interview_slot: inputs.interview_slot.filter(|s| !s.is_empty()),
    }
}
