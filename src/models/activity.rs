// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava records as flat JSON objects.
//!
//! Activities and segment efforts are kept untyped: the reshaping pipeline
//! renames and adds fields, and upstream may omit any of them.

use serde_json::{Map, Value};

/// One upstream record (activity or segment effort).
pub type Record = Map<String, Value>;

/// Truthiness as the upstream scripts see it: null, false, zero and empty
/// strings/containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Numeric field as f64, if present and numeric.
pub fn number(record: &Record, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// One-line summary used in fetch logs: `- Morning Ride (24.32 km)`.
pub fn summary_line(activity: &Record) -> String {
    let name = activity
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unnamed activity");
    let distance_km = number(activity, "distance").unwrap_or(0.0) / 1000.0;
    format!("- {} ({:.2} km)", name, distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(0.1)));
        assert!(is_truthy(&json!({"id": 1})));
    }

    #[test]
    fn test_summary_line() {
        let activity = record(json!({"name": "Morning Ride", "distance": 24321.4}));
        assert_eq!(summary_line(&activity), "- Morning Ride (24.32 km)");

        let bare = record(json!({}));
        assert_eq!(summary_line(&bare), "- Unnamed activity (0.00 km)");
    }
}
