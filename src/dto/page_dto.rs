use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::views::contract::{PanelRequest, SortKey};
use crate::views::table::SortDir;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub interview_slot: Option<String>,
}

/// Table and panel state of the contract page, carried in the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractQuery {
    pub contract: Option<usize>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDir>,
    /// Column header the user clicked.
    pub toggle: Option<SortKey>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub panel: Option<PanelRequest>,
    pub week: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPageQuery {
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetLatestPayload {
    #[validate(length(min = 1))]
    pub version_id: String,
    #[serde(default)]
    pub confirmation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewPageQuery {
    pub interview_slot: Option<String>,
    /// Slot name picked in the drawer.
    pub slot: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryPageQuery {
    pub proposal: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProposalActionPayload {
    pub proposal: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalActionResponse {
    pub status: &'static str,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimesheetActionResponse {
    pub week_number: u32,
    pub total_hours: u32,
    pub status: &'static str,
}
