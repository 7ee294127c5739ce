use rust_decimal::Decimal;
use serde::Serialize;

use super::Section;
use crate::models::offer::{OfferCandidate, OrderData, ProjectInfo, Terms};
use crate::utils::format::{format_currency, initials, PLACEHOLDER_AVATAR};

/// Candidate header shared by the offer page and the salary drawer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSummary {
    pub name: String,
    pub initials: String,
    pub avatar: String,
    pub profession: String,
    pub nationality: String,
    pub category: String,
    pub project: ProjectInfo,
}

impl From<&OfferCandidate> for CandidateSummary {
    fn from(candidate: &OfferCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            initials: initials(&candidate.name),
            avatar: if candidate.avatar.is_empty() {
                PLACEHOLDER_AVATAR.to_string()
            } else {
                candidate.avatar.clone()
            },
            profession: candidate.profession.clone(),
            nationality: candidate.nationality.clone(),
            category: candidate.category.clone(),
            project: candidate.project_info.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompensationLine {
    pub label: &'static str,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferLetter {
    pub candidate: CandidateSummary,
    pub total_salary: String,
    pub proposed_date: String,
    pub compensation: Vec<CompensationLine>,
    pub work_policy: Vec<PolicyLine>,
    pub terms: Terms,
    pub notes: String,
}

impl From<&OfferCandidate> for OfferLetter {
    fn from(candidate: &OfferCandidate) -> Self {
        let comp = &candidate.compensation;
        let sym = comp.currency_symbol.as_str();
        let money = |label: &'static str, amount: Decimal| CompensationLine {
            label,
            amount: format_currency(amount, sym),
        };
        let policy = &candidate.work_policy;

        Self {
            candidate: CandidateSummary::from(candidate),
            total_salary: comp.total_salary.clone(),
            proposed_date: comp.proposed_date.clone(),
            compensation: vec![
                money("Base Salary", comp.base_salary),
                money("Mandatory Burdens", comp.mandatory_burdens),
                money("Variable Benefits", comp.variable_benefits),
                money("Total Daily Cost", comp.total_daily_cost),
                money("Overtime (Weekdays)", comp.overtime_weekdays),
                money("Overtime (Weekends)", comp.overtime_weekends),
                money("Overtime (Holiday)", comp.overtime_holiday),
                money("Standby Rate", comp.standby_rate),
            ],
            work_policy: vec![
                PolicyLine {
                    label: "Month Bill Rate",
                    value: format_currency(policy.month_bill_rate, sym),
                },
                PolicyLine {
                    label: "Annual Bill Rate",
                    value: format_currency(policy.annual_bill_rate, sym),
                },
                PolicyLine {
                    label: "Public Holidays",
                    value: format!("{} days", policy.public_holidays),
                },
                PolicyLine {
                    label: "Vacation",
                    value: format!("{} days", policy.vacation),
                },
                PolicyLine {
                    label: "Sick Leave",
                    value: format!("{} days", policy.sick_leave),
                },
                PolicyLine {
                    label: "Travel Days",
                    value: format!("{} days", policy.travel_days),
                },
            ],
            terms: candidate.terms.clone(),
            notes: comp.notes.clone(),
        }
    }
}

pub fn build_offer(order: Option<Option<OrderData>>) -> Section<OfferLetter> {
    match order {
        None => Section::Loading,
        Some(order) => match order.and_then(|o| o.candidate) {
            Some(candidate) => Section::Ready(OfferLetter::from(&candidate)),
            None => Section::empty("No offer available"),
        },
    }
}
