//! Terminal UI helpers for ranking display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{ScoredTask, Strategy};

/// Table color for a composite score
pub fn score_color(score: f64) -> Color {
    if score >= 75.0 {
        Color::Red
    } else if score >= 55.0 {
        Color::Yellow
    } else if score >= 35.0 {
        Color::White
    } else {
        Color::DarkGrey
    }
}

/// Create a table for displaying ranked tasks
pub fn ranking_table(tasks: &[ScoredTask]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Due").fg(Color::Cyan),
        Cell::new("Hours").fg(Color::Cyan),
        Cell::new("Imp").fg(Color::Cyan),
        Cell::new("Deps").fg(Color::Cyan),
    ]);

    for (rank, task) in tasks.iter().enumerate() {
        let due = task
            .due_date
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let hours = task
            .estimated_hours
            .map_or_else(|| "-".to_string(), |h| format!("{h:.1}"));
        let importance = task
            .importance
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        let deps = if task.dependencies.is_empty() {
            "-".to_string()
        } else {
            task.dependencies
                .iter()
                .map(|d| match d {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(task.id.to_string()),
            Cell::new(&task.title),
            Cell::new(format!("{:.2}", task.score)).fg(score_color(task.score)),
            Cell::new(due),
            Cell::new(hours),
            Cell::new(importance),
            Cell::new(deps),
        ]);
    }

    table
}

/// Create a table listing the strategies and their weights
pub fn strategy_table(default: Strategy) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Strategy").fg(Color::Cyan),
        Cell::new("Importance").fg(Color::Cyan),
        Cell::new("Urgency").fg(Color::Cyan),
        Cell::new("Effort").fg(Color::Cyan),
        Cell::new("Dependency").fg(Color::Cyan),
        Cell::new("Default").fg(Color::Cyan),
    ]);

    for strategy in Strategy::ALL {
        let w = strategy.weights();
        let marker = if strategy == default { "●" } else { "" };
        table.add_row(vec![
            Cell::new(strategy.as_str()),
            Cell::new(format!("{:.2}", w.importance)),
            Cell::new(format!("{:.2}", w.urgency)),
            Cell::new(format!("{:.2}", w.effort)),
            Cell::new(format!("{:.2}", w.dependency)),
            Cell::new(marker).fg(Color::Green),
        ]);
    }

    table
}

/// Print each task's explanation, one factor per line
pub fn display_explanations(tasks: &[ScoredTask]) {
    for (rank, task) in tasks.iter().enumerate() {
        println!(
            "{} {} {} {}",
            format!("{}.", rank + 1).dimmed(),
            task.title.bold(),
            format!("[{}]", task.id).cyan(),
            format!("{:.2}", task.score).yellow()
        );
        for part in task.explanation.split("; ") {
            println!("   {} {part}", "•".dimmed());
        }
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RankingDomain;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_ranking_table_has_row_per_task() {
        let raw = json!([{"id": 1, "title": "A", "dependencies": [2, "x"]}, {"id": 2}]);
        let ranked = RankingDomain::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
            .rank(raw.as_array().unwrap(), Strategy::SmartBalance);

        let table = ranking_table(&ranked);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("2, x"));
    }

    #[test]
    fn test_strategy_table_lists_all() {
        let table = strategy_table(Strategy::SmartBalance);
        assert_eq!(table.row_iter().count(), Strategy::ALL.len());
        assert!(table.to_string().contains("deadline_driven"));
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(83.75), Color::Red);
        assert_eq!(score_color(60.0), Color::Yellow);
        assert_eq!(score_color(10.0), Color::DarkGrey);
    }
}
