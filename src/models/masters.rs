use serde::{Deserialize, Serialize};

use crate::utils::flexible::deserialize_string_or_blank as blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "blank")]
    pub id: String,
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "blank")]
    pub code: String,
    #[serde(deserialize_with = "blank")]
    pub name: String,
    #[serde(deserialize_with = "blank")]
    pub symbol: String,
    #[serde(deserialize_with = "blank")]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "blank")]
    pub country_code: String,
    #[serde(deserialize_with = "blank")]
    pub country_name: String,
    #[serde(deserialize_with = "blank")]
    pub currency_code: String,
    #[serde(deserialize_with = "blank")]
    pub currency_symbol: String,
    #[serde(deserialize_with = "blank")]
    pub timezone: String,
    #[serde(deserialize_with = "blank")]
    pub iso_code: String,
    #[serde(deserialize_with = "blank")]
    pub currency_name: String,
}
