use serde::Serialize;

use super::Section;
use crate::dto::candidate_dto::ActionResponse;
use crate::models::interview::InterviewSlotData;
use crate::utils::time::{format_slot_date, format_slot_time};

pub const ACCEPT_FAILED: &str = "Interview slot accepted failed";
pub const ACCEPT_OK: &str = "Slot Accepted";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotOption {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewDrawer {
    pub interview_id: String,
    pub job_title: String,
    pub round: String,
    pub interview_type: String,
    pub interview_mode: String,
    pub slots: Vec<SlotOption>,
    pub selected_slot: Option<String>,
    pub can_submit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewView {
    pub drawer: Section<InterviewDrawer>,
    pub toast: Option<Toast>,
    /// Set once a slot is accepted; the drawer closes and returns here.
    pub redirect: Option<String>,
}

pub fn build_drawer(
    interview_id: &str,
    data: Option<Option<InterviewSlotData>>,
    selected_slot: Option<String>,
) -> Section<InterviewDrawer> {
    let data = match data {
        None => return Section::Loading,
        Some(None) => return Section::empty("No slots available"),
        Some(Some(data)) => data,
    };

    let selected_slot = selected_slot.filter(|name| {
        data.available_slots.iter().any(|slot| &slot.name == name)
    });
    let slots = data
        .available_slots
        .iter()
        .enumerate()
        .map(|(i, slot)| SlotOption {
            index: i + 1,
            id: slot.id.clone(),
            name: slot.name.clone(),
            date: format_slot_date(&slot.slot_date),
            time: format_slot_time(&slot.slot_time),
            selected: selected_slot.as_deref() == Some(slot.name.as_str()),
        })
        .collect();

    Section::Ready(InterviewDrawer {
        interview_id: interview_id.to_string(),
        job_title: data.job_title,
        round: data.round,
        interview_type: data.interview_type,
        interview_mode: data.interview_mode,
        can_submit: selected_slot.is_some(),
        selected_slot,
        slots,
    })
}

/// Toast for a slot-accept answer. A transport or HTTP failure surfaces its
/// own message.
pub fn accept_toast(outcome: &std::result::Result<ActionResponse, String>) -> Toast {
    match outcome {
        Ok(response) if response.is_success() => Toast {
            kind: ToastKind::Success,
            message: response
                .message
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| ACCEPT_OK.to_string()),
        },
        Ok(_) => Toast {
            kind: ToastKind::Error,
            message: ACCEPT_FAILED.to_string(),
        },
        Err(message) => Toast {
            kind: ToastKind::Error,
            message: message.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::candidate_dto::ActionMessage;
    use crate::models::interview::SlotDetail;

    fn slots() -> InterviewSlotData {
        InterviewSlotData {
            job_title: "Rig Engineer".into(),
            round: "2".into(),
            available_slots: vec![
                SlotDetail {
                    id: "1".into(),
                    name: "SLOT-1".into(),
                    slot_date: "2025-01-05".into(),
                    slot_time: "14:30:00".into(),
                },
                SlotDetail {
                    id: "2".into(),
                    name: "SLOT-2".into(),
                    slot_date: "2025-01-06".into(),
                    slot_time: "09:00".into(),
                },
            ],
            ..InterviewSlotData::default()
        }
    }

    #[test]
    fn submit_needs_a_known_slot() {
        let drawer = build_drawer("INT-1", Some(Some(slots())), None);
        assert!(!drawer.ready().unwrap().can_submit);

        let drawer = build_drawer("INT-1", Some(Some(slots())), Some("SLOT-9".into()));
        assert!(!drawer.ready().unwrap().can_submit);

        let drawer = build_drawer("INT-1", Some(Some(slots())), Some("SLOT-2".into()));
        let drawer = drawer.ready().unwrap();
        assert!(drawer.can_submit);
        assert!(drawer.slots[1].selected);
        assert_eq!(drawer.slots[0].date, "Jan 5, 2025");
        assert_eq!(drawer.slots[0].time, "2:30 PM");
        assert_eq!(drawer.slots[1].index, 2);
    }

    #[test]
    fn toast_messages() {
        let ok = ActionResponse {
            message: ActionMessage {
                status: Some("success".into()),
                message: None,
            },
        };
        assert_eq!(accept_toast(&Ok(ok)).message, ACCEPT_OK);

        let rejected = ActionResponse {
            message: ActionMessage {
                status: Some("failed".into()),
                message: Some("Slot taken".into()),
            },
        };
        let toast = accept_toast(&Ok(rejected));
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, ACCEPT_FAILED);

        let toast = accept_toast(&Err("Failed: 502".into()));
        assert_eq!(toast.message, "Failed: 502");
    }
}
