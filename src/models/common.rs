//! Shared schema building blocks
//!
//! Alma nests most scalar attributes inside small `{value}` or
//! `{value, desc}` objects. Three shared shapes cover every occurrence,
//! picked per field by which members that field actually requires.
//! Date-like fields carry a literal trailing `Z` that must be stripped
//! before calendar parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A `{value}` wrapper with a required value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub value: String,
}

/// A `{value, desc}` wrapper with a required value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeDesc {
    pub value: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// A `{value, desc}` wrapper where both members may be absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalCodeDesc {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// A `{value, link}` wrapper pointing at another API resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedCode {
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

// ============================================================================
// Date normalization
// ============================================================================

/// Strip the literal timezone suffix Alma appends to calendar dates
fn normalize_date(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix('Z').unwrap_or(trimmed)
}

fn parse_date<'de, D>(raw: &str) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    NaiveDate::parse_from_str(normalize_date(raw), "%Y-%m-%d").map_err(serde::de::Error::custom)
}

/// Deserialize a required date field, e.g. `"2022-01-01Z"`
pub(crate) fn date_z<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date::<D>(&raw)
}

/// Deserialize an optional date field; null and absent both decode to `None`
pub(crate) fn date_z_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date::<D>(&raw).map(Some),
        None => Ok(None),
    }
}

/// Deserialize a numeric field the API sometimes sends as `""`
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeEmpty {
        Number(f64),
        Text(String),
        Nothing,
    }

    match MaybeEmpty::deserialize(deserializer)? {
        MaybeEmpty::Number(n) => Ok(Some(n)),
        MaybeEmpty::Text(s) if s.is_empty() => Ok(None),
        MaybeEmpty::Text(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        MaybeEmpty::Nothing => Ok(None),
    }
}
