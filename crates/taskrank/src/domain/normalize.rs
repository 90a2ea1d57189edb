//! Raw task records to normalized tasks.
//!
//! Normalization never fails. Every field that cannot be coerced falls back
//! to "absent" so one bad task does not block ranking the rest.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::entities::{Task, TaskId, UNTITLED};

/// Normalize raw records, skipping entries that are not JSON objects.
///
/// Default ids count kept records only, so a skipped entry shifts the
/// positional id of everything after it.
pub fn normalize_tasks(raw: &[Value]) -> Vec<Task> {
    let mut tasks = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let Some(record) = entry.as_object() else {
            tracing::trace!(index, "skipping non-record task entry");
            continue;
        };
        tasks.push(normalize_record(record, tasks.len() + 1));
    }

    tasks
}

/// Normalize a single record given its 1-based position among kept records
pub fn normalize_record(record: &Map<String, Value>, position: usize) -> Task {
    Task {
        id: record
            .get("id")
            .map_or_else(|| TaskId::positional(position), |id| TaskId(id.clone())),
        title: title(record.get("title")),
        due_date: record.get("due_date").and_then(parse_date),
        estimated_hours: record.get("estimated_hours").and_then(coerce_f64),
        importance: record.get("importance").and_then(coerce_i64),
        dependencies: dependencies(record.get("dependencies")),
    }
}

/// Strict `YYYY-MM-DD` date; other strings and non-strings are absent
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn title(value: Option<&Value>) -> String {
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(v) if is_truthy(v) => literal(v).trim().to_string(),
        _ => String::new(),
    };

    if text.is_empty() {
        UNTITLED.to_string()
    } else {
        text
    }
}

/// Literal text of a non-string title: `True`, `[1, 'a']`, `{'k': None}`
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:?}"),
            _ => n.to_string(),
        },
        Value::String(s) => quoted(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", quoted(key), literal(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn quoted(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        return format!("\"{s}\"");
    }
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn coerce_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    (!number.is_nan()).then_some(number)
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn dependencies(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Value::String(token.to_string()))
            .collect(),
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Whether a JSON value counts as "set" for defaulting purposes
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
