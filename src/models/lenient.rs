//! Lenient field decoding for seed documents
//!
//! Seed files are hand-edited, so a code may arrive as a number and a key may
//! be present but `null`. Every text column accepts any JSON value and turns
//! it into the text that lands in the CSV cell.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

use super::template::{DEFAULT_CASH_FLOW_CATEGORY, DEFAULT_CATEGORY};

/// Text form of a JSON value; `None` for `null`
///
/// Strings are taken verbatim, numbers as written, booleans capitalised the
/// way the importer has always received them. Arrays and objects fall back to
/// compact JSON.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Any value as text, `null` as the empty string
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Any value as text, `null` as `None`
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

/// A list whose items are each turned into text; `null` is an empty list
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| value_text(item).unwrap_or_default())
            .collect()),
        other => Err(D::Error::custom(format!("expected a list, found {}", other))),
    }
}

/// Template category, `null` falling back to EXPENSE
pub fn category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()))
}

/// Cash-flow category, `null` falling back to OPERATING
pub fn cash_flow_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?)
        .unwrap_or_else(|| DEFAULT_CASH_FLOW_CATEGORY.to_string()))
}
