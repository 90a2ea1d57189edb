//! Configuration entities.

use serde::{Deserialize, Serialize};

use super::Strategy;

/// Ranker configuration, stored as `.taskrank/config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Strategy used when neither the request nor the command line names one
    #[serde(default, rename = "defaultStrategy")]
    pub default_strategy: Strategy,

    /// Number of tasks returned by `suggest`
    #[serde(default = "default_suggestion_limit", rename = "suggestionLimit")]
    pub suggestion_limit: usize,
}

const fn default_suggestion_limit() -> usize {
    3
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::default(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}
