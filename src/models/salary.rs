use serde::{Deserialize, Serialize};

use super::offer::{OfferCandidate, Terms};
use crate::utils::flexible::deserialize_string_or_blank as blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryFigure {
    #[serde(deserialize_with = "blank")]
    pub amount: String,
    /// Gross, net, or whatever basis the proposer quoted.
    #[serde(rename = "type", deserialize_with = "blank")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submitter {
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub date: String,
}

/// A versioned salary proposal or candidate expectation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Proposal {
    #[serde(deserialize_with = "blank")]
    pub version: String,
    #[serde(deserialize_with = "blank")]
    pub status: String,
    pub salary: SalaryFigure,
    #[serde(deserialize_with = "blank")]
    pub joining_date: String,
    pub submitted_by: Submitter,
    #[serde(deserialize_with = "blank")]
    pub notes: String,
    pub terms: Terms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryNegotiation {
    pub candidate: Option<OfferCandidate>,
    pub proposals: Vec<Proposal>,
}
