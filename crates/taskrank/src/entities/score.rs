//! Scored task output and per-factor results.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::task::{Task, TaskId};

/// One factor's score and the reason behind it
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    /// Score in [0, 100] (dependency may be scaled by the cycle penalty)
    pub score: f64,
    pub rationale: String,
}

impl FactorScore {
    pub fn new(score: f64, rationale: impl Into<String>) -> Self {
        Self {
            score,
            rationale: rationale.into(),
        }
    }
}

/// The four factor scores of a task
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScores {
    pub urgency: FactorScore,
    pub importance: FactorScore,
    pub effort: FactorScore,
    pub dependency: FactorScore,
}

impl FactorScores {
    /// Semicolon-joined rationale of every factor with its one-decimal score
    pub fn explanation(&self) -> String {
        [
            ("Urgency", &self.urgency),
            ("Importance", &self.importance),
            ("Effort", &self.effort),
            ("Dependencies", &self.dependency),
        ]
        .iter()
        .map(|(label, factor)| {
            format!("{label}: {} (score {:.1})", factor.rationale, factor.score)
        })
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// A ranked task as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    pub id: TaskId,
    pub title: String,
    /// Serialized as `YYYY-MM-DD` or null
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    pub importance: Option<i64>,
    pub dependencies: Vec<Value>,
    /// Composite score rounded to two decimals
    pub score: f64,
    pub explanation: String,

    #[serde(skip)]
    pub factors: FactorScores,
}

impl ScoredTask {
    pub fn new(task: Task, composite: f64, factors: FactorScores) -> Self {
        Self {
            id: task.id,
            title: task.title,
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies,
            score: round2(composite),
            explanation: factors.explanation(),
            factors,
        }
    }
}

/// Round to two decimals from the exact binary value, ties to even
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
