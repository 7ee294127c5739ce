//! Lenient deserializers for backend payloads whose field types drift
//! between numbers, numeric strings and empty strings.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    String(String),
}

/// Frappe check fields come back as `0`/`1`; older records use real booleans.
pub fn deserialize_opt_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match Option::<BoolOrInt>::deserialize(deserializer)? {
        Some(BoolOrInt::Bool(b)) => Ok(Some(b)),
        Some(BoolOrInt::Int(i)) => Ok(Some(i != 0)),
        Some(BoolOrInt::String(s)) => match s.as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" | "" => Ok(Some(false)),
            _ => Err(serde::de::Error::custom(format!("Invalid boolean string: {}", s))),
        },
        None => Ok(None),
    }
}

pub fn deserialize_number_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Int(i)) => Ok(i as f64),
        Some(NumberOrString::Float(f)) => Ok(f),
        Some(NumberOrString::String(s)) => Ok(s.trim().parse::<f64>().unwrap_or(0.0)),
        None => Ok(0.0),
    }
}

pub fn deserialize_opt_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Int(i)) => Ok(Some(i as f64)),
        Some(NumberOrString::Float(f)) => Ok(Some(f)),
        Some(NumberOrString::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        None => Ok(None),
    }
}

pub fn deserialize_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Int(i)) => Ok(Some(i.to_string())),
        Some(NumberOrString::Float(f)) => Ok(Some(f.to_string())),
        Some(NumberOrString::String(s)) => Ok(Some(s)),
        None => Ok(None),
    }
}

pub fn deserialize_string_or_blank<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string(deserializer)?.unwrap_or_default())
}

/// Day hours travel as a number, or as `""` when the day has no entry.
pub mod hours {
    use super::*;

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(h) => serializer.serialize_u32(*h),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Int(i)) if i >= 0 => Ok(Some(i as u32)),
            Some(NumberOrString::Float(f)) if f >= 0.0 => Ok(Some(f as u32)),
            Some(NumberOrString::String(s)) => Ok(s.trim().parse::<u32>().ok()),
            _ => Ok(None),
        }
    }
}
