use serde::Serialize;

use super::Section;
use crate::models::job::JobDetail;

const NA: &str = "N/A";

fn or_na(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| NA.to_string())
}

fn num_or_na(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NA.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementLine {
    pub name: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetailView {
    pub name: String,
    pub position_start: String,
    pub position_end: String,
    pub resources: String,
    pub bill_rate: String,
    pub location: String,
    pub work_days_per_week: String,
    pub work_hours_per_day: String,
    pub rotation: String,
    pub project: String,
    pub project_type: String,
    pub responsibilities: String,
    pub qualifications: Vec<String>,
    pub certifications: Vec<String>,
    pub visa_requirements: String,
    pub key_skills: Vec<String>,
    pub skills: Vec<RequirementLine>,
    pub tools: Vec<RequirementLine>,
    pub languages: Vec<String>,
}

impl From<JobDetail> for JobDetailView {
    fn from(job: JobDetail) -> Self {
        let requirements = |rows: Option<Vec<crate::models::job::Requirement>>| {
            rows.unwrap_or_default()
                .into_iter()
                .map(|r| RequirementLine {
                    experience: format!("{} - {} yrs", r.min_experience, r.max_experience),
                    name: r.fname,
                })
                .collect::<Vec<_>>()
        };
        let bill_rate = match (job.min_bill_rate, job.max_bill_rate) {
            (None, None) => NA.to_string(),
            (min, max) => format!(
                "{} {} - {}",
                job.billing_currency.clone().unwrap_or_default(),
                min.unwrap_or(0.0),
                max.unwrap_or(0.0)
            )
            .trim()
            .to_string(),
        };

        Self {
            name: job.name.unwrap_or_default(),
            position_start: job.position_start_date.unwrap_or_default(),
            position_end: job.position_est_end_date.unwrap_or_default(),
            resources: num_or_na(job.no_of_resources),
            bill_rate,
            location: or_na(job.location),
            work_days_per_week: num_or_na(job.work_days_per_week),
            work_hours_per_day: num_or_na(job.work_hours_per_day),
            rotation: format!(
                "{} On / {} Off",
                job.rotation_on_weeks.unwrap_or(0.0),
                job.rotation_off_weeks.unwrap_or(0.0)
            ),
            project: or_na(job.project),
            project_type: or_na(job.project_type),
            responsibilities: or_na(job.responsibilities),
            qualifications: job.qualification.unwrap_or_default(),
            certifications: job
                .certifications
                .unwrap_or_default()
                .into_iter()
                .map(|c| or_na(c.certification))
                .collect(),
            visa_requirements: or_na(job.visa_requirements),
            key_skills: job.key_skills.unwrap_or_default(),
            skills: requirements(job.skills_and_experience),
            tools: requirements(job.tools_familiarity),
            languages: job
                .language_requirement
                .unwrap_or_default()
                .into_iter()
                .map(|l| format!("{} (read {}, speak {}, write {})", l.fname, l.read, l.speak, l.write))
                .collect(),
        }
    }
}

pub fn build_job_detail(detail: Option<Option<JobDetail>>) -> Section<JobDetailView> {
    match detail {
        None => Section::Loading,
        Some(Some(job)) if !job.is_blank() => Section::Ready(JobDetailView::from(job)),
        Some(_) => Section::empty("Job not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_fall_back_to_na() {
        let view = JobDetailView::from(JobDetail {
            name: Some("Rig Engineer".into()),
            rotation_on_weeks: Some(4.0),
            ..JobDetail::default()
        });
        assert_eq!(view.location, NA);
        assert_eq!(view.resources, NA);
        assert_eq!(view.bill_rate, NA);
        assert_eq!(view.rotation, "4 On / 0 Off");
    }

    #[test]
    fn blank_detail_is_not_found() {
        assert_eq!(
            build_job_detail(Some(Some(JobDetail::default()))),
            Section::empty("Job not found")
        );
    }
}
