// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lenient field deserializers
//!
//! The backend is loose about JSON types: numbers arrive quoted, booleans as
//! `0`/`1`, and optional fields as `null` or `""`. These helpers are used with
//! `#[serde(default, deserialize_with = "...")]` on model fields.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

fn parse_number<E: de::Error>(value: Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("number out of range: {}", n))),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .replace(',', ".")
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| E::custom(format!("invalid number: {:?}", s)))
            }
        }
        Value::Bool(b) => Ok(Some(if b { 1.0 } else { 0.0 })),
        other => Err(E::custom(format!("expected number, found {}", other))),
    }
}

/// `f64` from a number or numeric string; null/empty → 0.0
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(parse_number(Value::deserialize(deserializer)?)?.unwrap_or(0.0))
}

/// `Option<f64>` from a number or numeric string; null/empty → None
pub fn opt_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    parse_number(Value::deserialize(deserializer)?)
}

fn to_int<E: de::Error>(n: f64) -> Result<i64, E> {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(E::custom(format!("expected integer, found {}", n)))
    }
}

/// `i64` from an integer or numeric string; null/empty → 0
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match parse_number(Value::deserialize(deserializer)?)? {
        Some(n) => to_int(n),
        None => Ok(0),
    }
}

/// `Option<i64>` from an integer or numeric string; null/empty → None
pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    parse_number(Value::deserialize(deserializer)?)?
        .map(to_int)
        .transpose()
}

/// `bool` from `true`/`false`, `0`/`1`, or their string forms; null → false
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0) != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => Err(de::Error::custom(format!("invalid boolean: {:?}", other))),
        },
        other => Err(de::Error::custom(format!("expected boolean, found {}", other))),
    }
}

/// `Option<String>` accepting numbers; null/empty → None
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::custom(format!("expected string, found {}", other))),
    }
}

/// `String` accepting numbers; null → ""
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// `Vec<T>` where the backend sends `null` or `false` for "nothing"
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(de::Error::custom))
            .collect(),
        other => Err(de::Error::custom(format!("expected array, found {}", other))),
    }
}

/// Any `T`, falling back to `T::default()` for null or unrecognized values
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        other => Ok(serde_json::from_value(other).unwrap_or_default()),
    }
}

/// Strip leading noise the backend sometimes prints before the JSON document
/// (PHP notices, a UTF-8 BOM). Returns `None` when no JSON start is found.
pub fn json_start(body: &str) -> Option<&str> {
    let trimmed = body.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(trimmed);
    }
    trimmed.find(['{', '[']).map(|idx| &trimmed[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "number")]
        weight: f64,
        #[serde(default, deserialize_with = "opt_int")]
        duration: Option<i64>,
        #[serde(default, deserialize_with = "int")]
        reps: i64,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
        #[serde(default, deserialize_with = "opt_text")]
        note: Option<String>,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_quoted_numbers_and_flags() {
        let sample: Sample = serde_json::from_str(
            r#"{"weight": "12,5", "duration": "45", "reps": 10, "active": "1", "note": "", "tags": null}"#,
        )
        .unwrap();
        assert_eq!(sample.weight, 12.5);
        assert_eq!(sample.duration, Some(45));
        assert_eq!(sample.reps, 10);
        assert!(sample.active);
        assert_eq!(sample.note, None);
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.weight, 0.0);
        assert_eq!(sample.duration, None);
        assert!(!sample.active);
    }

    #[test]
    fn test_null_duration_is_none() {
        let sample: Sample = serde_json::from_str(r#"{"duration": null, "reps": "7.0"}"#).unwrap();
        assert_eq!(sample.duration, None);
        assert_eq!(sample.reps, 7);
    }

    #[test]
    fn test_fractional_int_is_rejected() {
        let result: Result<Sample, _> = serde_json::from_str(r#"{"reps": 7.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_start_skips_notices() {
        assert_eq!(json_start("  {\"a\":1}"), Some("{\"a\":1}"));
        assert_eq!(
            json_start("<b>Notice</b>: undefined index {\"a\":1}"),
            Some("{\"a\":1}")
        );
        assert_eq!(json_start("\u{feff}[1]"), Some("[1]"));
        assert_eq!(json_start("   "), None);
        assert_eq!(json_start("no json here"), None);
    }
}
