use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::flexible::deserialize_string_or_blank as blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(deserialize_with = "blank")]
    pub project_name: String,
    #[serde(deserialize_with = "blank")]
    pub location: String,
    #[serde(deserialize_with = "blank")]
    pub start_date: String,
    #[serde(deserialize_with = "blank")]
    pub end_date: String,
    #[serde(deserialize_with = "blank")]
    pub contract_duration: String,
    #[serde(deserialize_with = "blank")]
    pub notice_period: String,
    #[serde(alias = "rotation_cycle", deserialize_with = "blank")]
    pub rotation_cycle: String,
    #[serde(alias = "working_hours", deserialize_with = "blank")]
    pub working_hours: String,
    #[serde(alias = "working_days", deserialize_with = "blank")]
    pub working_days: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkPolicy {
    pub month_bill_rate: Decimal,
    pub annual_bill_rate: Decimal,
    pub public_holidays: u32,
    pub vacation: u32,
    pub sick_leave: u32,
    pub travel_days: u32,
}

/// Terms grouped by the party responsible for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Terms {
    pub by_client: Vec<String>,
    pub by_candidate: Vec<String>,
    pub talent_engine: Vec<String>,
    pub not_applicable: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Compensation {
    #[serde(deserialize_with = "blank")]
    pub currency_symbol: String,
    #[serde(deserialize_with = "blank")]
    pub total_salary: String,
    #[serde(deserialize_with = "blank")]
    pub proposed_date: String,
    pub base_salary: Decimal,
    pub mandatory_burdens: Decimal,
    pub variable_benefits: Decimal,
    pub total_daily_cost: Decimal,
    pub overtime_weekdays: Decimal,
    pub overtime_weekends: Decimal,
    pub overtime_holiday: Decimal,
    pub standby_rate: Decimal,
    #[serde(deserialize_with = "blank")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferCandidate {
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub profession: String,
    #[serde(deserialize_with = "blank")]
    pub avatar: String,
    #[serde(deserialize_with = "blank")]
    pub nationality: String,
    #[serde(deserialize_with = "blank")]
    pub category: String,
    pub project_info: ProjectInfo,
    pub work_policy: WorkPolicy,
    pub terms: Terms,
    pub compensation: Compensation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderData {
    pub candidate: Option<OfferCandidate>,
}
