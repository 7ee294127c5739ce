use serde::{Deserialize, Serialize};

use crate::utils::flexible::{deserialize_opt_bool, deserialize_opt_number, deserialize_string_or_blank as blank};

/// One saved version of a candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionItem {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub version: Option<f64>,
    #[serde(deserialize_with = "blank")]
    pub created_by: String,
    #[serde(deserialize_with = "blank")]
    pub created_time: String,
    #[serde(deserialize_with = "blank")]
    pub created_on: String,
    #[serde(deserialize_with = "blank")]
    pub timezone: String,
    #[serde(deserialize_with = "blank")]
    pub status: String,
    #[serde(deserialize_with = "blank")]
    pub cloned_from: String,
    #[serde(deserialize_with = "deserialize_opt_bool")]
    pub is_latest: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionResponse {
    pub versions: Vec<VersionItem>,
}

impl VersionItem {
    pub fn is_latest(&self) -> bool {
        self.is_latest.unwrap_or(false)
    }

    pub fn is_draft(&self) -> bool {
        self.status.to_lowercase().contains("draft")
    }
}
