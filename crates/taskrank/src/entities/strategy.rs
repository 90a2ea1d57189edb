//! Weighting strategies and the composite score combiner.

use serde::{Deserialize, Serialize};

use crate::errors::RankError;

/// Named weighting scheme over the four scoring factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Cheap tasks first
    FastestWins,
    /// Importance dominates
    HighImpact,
    /// Due dates dominate
    DeadlineDriven,
    #[default]
    SmartBalance,
}

impl Strategy {
    /// All strategies, in display order
    pub const ALL: [Self; 4] = [
        Self::SmartBalance,
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
    ];

    /// Wire name of the strategy
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
            Self::SmartBalance => "smart_balance",
        }
    }

    /// Fixed weight vector for this strategy
    pub fn weights(self) -> Weights {
        match self {
            Self::FastestWins => Weights {
                importance: 0.25,
                urgency: 0.15,
                effort: 0.60,
                dependency: 0.0,
            },
            Self::HighImpact => Weights {
                importance: 0.70,
                urgency: 0.20,
                effort: 0.0,
                dependency: 0.10,
            },
            Self::DeadlineDriven => Weights {
                importance: 0.20,
                urgency: 0.70,
                effort: 0.0,
                dependency: 0.10,
            },
            Self::SmartBalance => Weights {
                importance: 0.35,
                urgency: 0.30,
                effort: 0.15,
                dependency: 0.20,
            },
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = RankError;

    /// Parses a strategy name. A blank name selects the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "smart_balance" => Ok(Self::SmartBalance),
            "fastest_wins" => Ok(Self::FastestWins),
            "high_impact" => Ok(Self::HighImpact),
            "deadline_driven" => Ok(Self::DeadlineDriven),
            other => Err(RankError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

/// Weights over (importance, urgency, effort, dependency); each vector sums to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub importance: f64,
    pub urgency: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Weights {
    pub fn total(&self) -> f64 {
        self.importance + self.urgency + self.effort + self.dependency
    }

    /// Weighted sum of the four factor scores.
    ///
    /// Terms are added heaviest weight first (ties in field order), which
    /// fixes the floating-point result of each strategy's formula.
    pub fn combine(&self, urgency: f64, importance: f64, effort: f64, dependency: f64) -> f64 {
        let mut terms = [
            (self.importance, importance),
            (self.urgency, urgency),
            (self.effort, effort),
            (self.dependency, dependency),
        ];
        terms.sort_by(|a, b| b.0.total_cmp(&a.0));
        terms
            .iter()
            .fold(0.0, |sum, (weight, score)| sum + weight * score)
    }
}
