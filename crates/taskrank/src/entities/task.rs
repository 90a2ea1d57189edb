//! Normalized task entity and identifier types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder used when a task has no usable title
pub const UNTITLED: &str = "Untitled task";

/// Task identifier as supplied by the caller.
///
/// Identifiers are opaque: any JSON value is accepted and echoed back
/// unchanged in the output. Equality for graph purposes goes through
/// [`IdKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Value);

impl TaskId {
    /// Positional identifier (1-based)
    pub fn positional(position: usize) -> Self {
        Self(Value::from(position))
    }

    /// True when the caller explicitly sent `"id": null`
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }

    /// Canonical key used to match dependency references against ids
    pub fn key(&self) -> IdKey {
        IdKey::of(&self.0)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Canonical, totally ordered form of a raw identifier.
///
/// Numbers compare by value (`1` and `1.0` are the same id), booleans count
/// as `1`/`0`, strings compare by content. A string never equals a number,
/// so a comma-separated `"2"` reference does not match a numeric id `2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdKey {
    Null,
    Int(i64),
    Uint(u64),
    /// Non-integral float, keyed by bit pattern
    Float(u64),
    Str(String),
    /// Arrays and objects, keyed by their JSON text
    Composite(String),
}

impl IdKey {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Int(i64::from(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    Self::from_float(f)
                }
            }
            Value::String(s) => Self::Str(s.clone()),
            other => Self::Composite(other.to_string()),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_float(f: f64) -> Self {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Self::Int(f as i64)
        } else {
            Self::Float(f.to_bits())
        }
    }
}

/// A task after normalization.
///
/// Every field has a fixed semantic type; anything the caller sent that
/// could not be coerced is `None` (or empty for dependencies).
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Raw identifier, or the 1-based position among kept records
    pub id: TaskId,

    /// Display title, never empty
    pub title: String,

    /// Calendar due date
    pub due_date: Option<NaiveDate>,

    /// Estimated effort in hours, unclamped
    pub estimated_hours: Option<f64>,

    /// Importance, unclamped
    pub importance: Option<i64>,

    /// Raw dependency references in declaration order
    pub dependencies: Vec<Value>,
}

impl Task {
    /// Create a task with only an id and title
    pub fn new(id: impl Into<Value>, title: impl Into<String>) -> Self {
        Self {
            id: TaskId(id.into()),
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            importance: None,
            dependencies: Vec::new(),
        }
    }
}
