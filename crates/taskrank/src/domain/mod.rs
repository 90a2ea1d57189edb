//! Domain logic for task ranking.
//!
//! The ranking pipeline is pure: normalization, factor scoring, graph
//! analysis and ordering all work on in-memory data for a single call.
//! Only [`ConfigDomain`] touches the filesystem.

mod config;
pub mod factors;
pub mod graph;
pub mod normalize;
pub mod payload;
mod ranking;

pub use config::{ConfigDomain, CONFIG_FILE};
pub use graph::{CycleSet, DependencyGraph};
pub use normalize::normalize_tasks;
pub use payload::{extract_request, parse_request, RankRequest};
pub use ranking::{RankingDomain, NO_DUE_DATE_SENTINEL};
