#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

//! # Taskrank
//!
//! Explainable "what should I do next" ordering for a list of tasks.
//!
//! Each task is scored on four factors (urgency, importance, effort and
//! dependency impact), the factors are combined under a named
//! [`Strategy`], and the result is sorted deterministically with an
//! explanation attached to every task.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use taskrank::{RankingDomain, Strategy};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let tasks = json!([
//!     {"id": 1, "title": "Pay invoice", "due_date": "2024-03-08", "importance": 9},
//!     {"id": 2, "title": "Read book", "importance": 2, "estimated_hours": 10},
//! ]);
//!
//! let ranked = RankingDomain::new(today).rank(tasks.as_array().unwrap(), Strategy::SmartBalance);
//! assert_eq!(ranked[0].title, "Pay invoice");
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Ranking pipeline
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::{extract_request, parse_request, ConfigDomain, RankRequest, RankingDomain};
pub use entities::{
    FactorScore, FactorScores, RankerConfig, ScoredTask, Strategy, Task, TaskId, Weights,
};
pub use errors::{RankError, RankResult};
