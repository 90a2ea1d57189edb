//! Core data structures for task ranking.

mod config;
mod score;
mod strategy;
mod task;

pub use config::RankerConfig;
pub use score::{FactorScore, FactorScores, ScoredTask};
pub use strategy::{Strategy, Weights};
pub use task::{IdKey, Task, TaskId, UNTITLED};
