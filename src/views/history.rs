use serde::Serialize;

use super::profile::{build_profile, ProfileView};
use super::Section;
use crate::models::candidate::SingleCandidateData;
use crate::models::history::VersionItem;
use crate::utils::time::format_date;

pub const CONFIRM_ERROR: &str = "Please type 'YES' to confirm";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionCard {
    pub id: String,
    pub label: String,
    pub created_by: String,
    pub created: String,
    pub cloned_from: String,
    pub is_latest: bool,
    pub is_draft: bool,
    pub is_active: bool,
    pub href: String,
}

pub fn version_label(version: Option<f64>) -> String {
    match version {
        Some(v) => format!("Version {:.1}", v),
        None => "N/A".to_string(),
    }
}

/// The backend's flagged latest version, else the first listed.
pub fn latest_version(versions: &[VersionItem]) -> Option<&VersionItem> {
    versions
        .iter()
        .find(|v| v.is_latest())
        .or_else(|| versions.first())
}

/// Accepts "yes" in any case.
pub fn confirm_set_latest(input: &str) -> std::result::Result<(), &'static str> {
    if input.trim().eq_ignore_ascii_case("yes") {
        Ok(())
    } else {
        Err(CONFIRM_ERROR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub versions: Section<Vec<VersionCard>>,
    pub displayed_version_id: Option<String>,
    pub candidate: ProfileView,
    pub confirm_error: Option<String>,
}

#[derive(Debug, Default)]
pub struct HistoryInputs {
    pub versions: Option<Vec<VersionItem>>,
    pub candidate: Option<Option<SingleCandidateData>>,
    /// Version the user picked; defaults to the latest.
    pub selected: Option<String>,
    /// Version the user just marked as latest in this page load.
    pub marked_latest: Option<String>,
    pub confirm_error: Option<String>,
}

pub fn build_history(inputs: HistoryInputs) -> HistoryView {
    let latest_id = inputs
        .versions
        .as_deref()
        .and_then(latest_version)
        .map(|v| v.id.clone());
    let displayed = inputs.selected.clone().or(latest_id);

    let marked = inputs.marked_latest.clone();
    let active = displayed.clone();
    let versions = Section::from_list(inputs.versions, "No versions found", |v: VersionItem| {
        let is_latest = v.is_latest() || marked.as_deref() == Some(v.id.as_str());
        let created = format!("{} | {}", format_date(&v.created_on), v.created_time);
        VersionCard {
            label: version_label(v.version),
            is_draft: v.is_draft(),
            is_active: active.as_deref() == Some(v.id.as_str()),
            href: format!("/profile-history?version={}", v.id),
            created_by: v.created_by,
            created,
            cloned_from: v.cloned_from,
            is_latest,
            id: v.id,
        }
    });

    HistoryView {
        versions,
        displayed_version_id: displayed,
        candidate: build_profile(inputs.candidate),
        confirm_error: inputs.confirm_error,
    }
}
