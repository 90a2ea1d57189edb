//! Per-factor scoring functions.
//!
//! Each scorer maps one task attribute (or a graph fact) to a score in
//! [0, 100] with a short rationale used in the explanation.

use chrono::NaiveDate;

use crate::entities::FactorScore;

/// Neutral score for an unknown attribute
pub const NEUTRAL: f64 = 50.0;

/// Multiplier applied to the dependency score of cycle participants
pub const CYCLE_PENALTY: f64 = 0.75;

/// Urgency from the due date relative to `today`
#[allow(clippy::cast_precision_loss)]
pub fn urgency(due: Option<NaiveDate>, today: NaiveDate) -> FactorScore {
    let Some(due) = due else {
        return FactorScore::new(NEUTRAL, "no due date (neutral urgency)");
    };

    let days = (due - today).num_days();
    match days {
        d if d < 0 => FactorScore::new(100.0, format!("overdue by {} day(s)", -d)),
        0 => FactorScore::new(95.0, "due today"),
        1..=30 => FactorScore::new(
            30.0 + (30 - days) as f64 * 2.0,
            format!("due in {days} day(s)"),
        ),
        _ => FactorScore::new(20.0, format!("due in {days} day(s) (low urgency)")),
    }
}

/// Importance on a 1-10 scale, clamped
#[allow(clippy::cast_precision_loss)]
pub fn importance(value: Option<i64>) -> FactorScore {
    let Some(value) = value else {
        return FactorScore::new(NEUTRAL, "importance not specified (neutral)");
    };

    let clamped = value.clamp(1, 10);
    FactorScore::new(
        clamped as f64 / 10.0 * 100.0,
        format!("importance {clamped}/10"),
    )
}

/// Effort from estimated hours; cheaper is better
pub fn effort(hours: Option<f64>) -> FactorScore {
    let Some(hours) = hours else {
        return FactorScore::new(NEUTRAL, "effort unknown (neutral)");
    };

    let h = hours.max(0.0);
    if h == 0.0 {
        FactorScore::new(100.0, "trivial effort")
    } else if h <= 1.0 {
        FactorScore::new(95.0, format!("very low effort ({h:.1}h)"))
    } else if h <= 4.0 {
        FactorScore::new(
            95.0 - (h - 1.0) * (35.0 / 3.0),
            format!("moderate effort ({h:.1}h)"),
        )
    } else if h <= 8.0 {
        FactorScore::new(
            60.0 - (h - 4.0) * (30.0 / 4.0),
            format!("high effort ({h:.1}h)"),
        )
    } else {
        FactorScore::new(20.0, format!("very high effort ({h:.1}h)"))
    }
}

/// Dependency impact from how many tasks this one unblocks.
///
/// `dependents` is `None` for a task without an id, which cannot be
/// referenced by anything.
#[allow(clippy::cast_precision_loss)]
pub fn dependency(dependents: Option<usize>, in_cycle: bool) -> FactorScore {
    let Some(dependents) = dependents else {
        return FactorScore::new(40.0, "no explicit ID (dependency impact limited)");
    };

    let mut score = 40.0 + (dependents as f64 * 15.0).min(45.0);
    let mut rationale = if dependents > 0 {
        format!("unblocks {dependents} other task(s)")
    } else {
        "no tasks directly depend on this".to_string()
    };

    if in_cycle {
        score *= CYCLE_PENALTY;
        rationale.push_str(", part of a circular dependency (penalised)");
    }

    FactorScore::new(score, rationale)
}
