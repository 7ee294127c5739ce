use serde::{Deserialize, Serialize};

use crate::utils::flexible::deserialize_string_or_blank as blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotDetail {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub slot_date: String,
    #[serde(deserialize_with = "blank")]
    pub slot_time: String,
}

/// Interview round offered to the candidate with the slots still open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewSlotData {
    #[serde(deserialize_with = "blank")]
    pub job_title: String,
    #[serde(deserialize_with = "blank")]
    pub round: String,
    #[serde(deserialize_with = "blank")]
    pub interview_type: String,
    #[serde(deserialize_with = "blank")]
    pub interview_mode: String,
    pub available_slots: Vec<SlotDetail>,
}
