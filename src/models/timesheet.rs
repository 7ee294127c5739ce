use serde::{Deserialize, Serialize};

use crate::utils::flexible::{deserialize_number_or_zero, deserialize_string_or_blank as blank};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimesheetStatus {
    #[default]
    Draft,
    SentForApproval,
    ResubmissionRequested,
    Approved,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::SentForApproval => "sent for approval",
            TimesheetStatus::ResubmissionRequested => "re-submission requested",
            TimesheetStatus::Approved => "approved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "Draft",
            TimesheetStatus::SentForApproval => "Sent for approval",
            TimesheetStatus::ResubmissionRequested => "Re-submission Requested",
            TimesheetStatus::Approved => "Approved",
        }
    }

    /// Weeks already with, or past, the approver are read-only.
    pub fn is_read_only(&self) -> bool {
        matches!(self, TimesheetStatus::Approved | TimesheetStatus::SentForApproval)
    }
}

impl From<String> for TimesheetStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sent for approval" => TimesheetStatus::SentForApproval,
            "re-submission requested" => TimesheetStatus::ResubmissionRequested,
            "approved" => TimesheetStatus::Approved,
            _ => TimesheetStatus::Draft,
        }
    }
}

impl From<TimesheetStatus> for String {
    fn from(status: TimesheetStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetDay {
    #[serde(deserialize_with = "blank")]
    pub weekday: String,
    #[serde(deserialize_with = "blank")]
    pub date_label: String,
    #[serde(with = "crate::utils::flexible::hours")]
    pub hours: Option<u32>,
    #[serde(deserialize_with = "blank")]
    pub remarks: String,
    pub locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetWeek {
    pub week_number: u32,
    #[serde(deserialize_with = "blank")]
    pub date_range: String,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub total_hours: f64,
    pub status: TimesheetStatus,
    pub days: Vec<TimesheetDay>,
}

/// One contract's timesheet for a year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetData {
    #[serde(deserialize_with = "blank")]
    pub contract_title: String,
    #[serde(deserialize_with = "blank")]
    pub contract_subtitle: String,
    pub year: i32,
    pub weeks: Vec<TimesheetWeek>,
}
