//! View models for each portal page. Builders here are pure: they take data
//! already fetched into the store and shape it for rendering.

use serde::Serialize;

use crate::utils::format::mask_text;

pub mod contract;
pub mod dashboard;
pub mod history;
pub mod interview;
pub mod job;
pub mod offer;
pub mod profile;
pub mod salary;
pub mod table;

/// Render state of one page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Loading,
    Empty { message: String },
    Ready(T),
}

impl<T> Section<T> {
    pub fn empty(message: &str) -> Self {
        Section::Empty {
            message: message.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Section::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Section<Vec<T>> {
    /// `None` means the slice was never fetched.
    pub fn from_list<S, F>(items: Option<Vec<S>>, empty_message: &str, map: F) -> Self
    where
        F: FnMut(S) -> T,
    {
        match items {
            None => Section::Loading,
            Some(items) if items.is_empty() => Section::empty(empty_message),
            Some(items) => Section::Ready(items.into_iter().map(map).collect()),
        }
    }
}

/// Text shown partially hidden until the user reveals it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskedText {
    pub masked: String,
    pub value: String,
}

impl MaskedText {
    pub fn new(value: &str, visible: usize) -> Self {
        Self {
            masked: mask_text(value, visible),
            value: value.to_string(),
        }
    }
}
