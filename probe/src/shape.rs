//! JSON shape assertions
//!
//! Helpers that compare a response body against the keys a check expects.

use crate::error::{ProbeError, ProbeResult};
use careergpt_probe_common::types::OpaqueId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Longest body excerpt embedded in a failure detail
const MAX_DETAIL_CHARS: usize = 300;

/// Keys from `fields` that are absent in `value`, in the order given
pub fn missing_fields(value: &Value, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| value.get(**field).is_none())
        .map(|field| field.to_string())
        .collect()
}

/// Fail with every missing key when any of `fields` is absent
pub fn require_fields(value: &Value, fields: &[&str]) -> ProbeResult<()> {
    let missing = missing_fields(value, fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProbeError::MissingFields(missing))
    }
}

/// `value[key]` as an array
pub fn require_array<'a>(value: &'a Value, key: &str) -> ProbeResult<&'a Vec<Value>> {
    value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ProbeError::Unexpected(format!("Invalid response structure: {}", compact(value)))
        })
}

/// `value[key]` as an object
pub fn require_object<'a>(value: &'a Value, key: &str) -> ProbeResult<&'a Map<String, Value>> {
    value
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ProbeError::Unexpected(format!("No {key} in response: {}", compact(value))))
}

/// Opaque identifier at `value[key]`
pub fn opaque_id(value: &Value, key: &str) -> Option<OpaqueId> {
    value.get(key).and_then(OpaqueId::from_value)
}

/// Convert an already shape-checked body into its typed view
pub fn typed<T: DeserializeOwned>(value: &Value) -> ProbeResult<T> {
    serde_json::from_value(value.clone()).map_err(|err| ProbeError::Decode(err.to_string()))
}

/// Characters in a string, items in an array, keys in an object
pub fn text_len(value: &Value) -> usize {
    match value {
        Value::String(text) => text.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::Null => 0,
        other => other.to_string().chars().count(),
    }
}

/// First `max` characters of `text`, with `...` appended when clipped
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// One-line JSON rendering clipped for failure details
pub fn compact(value: &Value) -> String {
    preview(&value.to_string(), MAX_DETAIL_CHARS)
}
