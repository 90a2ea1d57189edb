//! Integration tests for the ranking pipeline.
//!
//! These go through the public API the way a boundary layer would:
//! decode a payload, rank it, and inspect the serialized output.

use chrono::NaiveDate;
use serde_json::{json, Value};
use taskrank::{parse_request, RankError, RankingDomain, Strategy};

fn domain() -> RankingDomain {
    RankingDomain::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
}

fn rank_json(payload: Value) -> Result<Value, RankError> {
    let request = taskrank::extract_request(payload)?;
    let ranked = domain().rank_request(&request)?;
    Ok(serde_json::to_value(ranked).unwrap())
}

mod payload_tests {
    use super::*;

    #[test]
    fn test_bare_array_and_object_payloads_agree() {
        let tasks = json!([
            {"id": 1, "title": "Write report", "importance": 6, "estimated_hours": 3},
            {"id": 2, "title": "Fix login bug", "due_date": "2024-03-11", "importance": 8}
        ]);
        let bare = rank_json(tasks.clone()).unwrap();
        let wrapped = rank_json(json!({"tasks": tasks, "strategy": "smart_balance"})).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_empty_strategy_matches_smart_balance() {
        let tasks = json!([{"id": 1, "importance": 4}, {"id": 2, "estimated_hours": 0}]);
        let empty = rank_json(json!({"tasks": tasks, "strategy": ""})).unwrap();
        let smart = rank_json(json!({"tasks": tasks, "strategy": "smart_balance"})).unwrap();
        assert_eq!(empty, smart);
    }

    #[test]
    fn test_bogus_strategy_fails() {
        let err = rank_json(json!({"tasks": [{"id": 1}], "strategy": "bogus"})).unwrap_err();
        assert_eq!(err.to_string(), "Unknown strategy: bogus");
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            rank_json(json!({"tasks": "1,2"})),
            Err(RankError::Payload { .. })
        ));
        assert!(matches!(rank_json(json!(42)), Err(RankError::Payload { .. })));
        assert!(matches!(
            parse_request("[{"),
            Err(RankError::JsonParseError { .. })
        ));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_output_record_shape() {
        let ranked = rank_json(json!([
            {"id": "a", "title": "Pay invoice", "due_date": "2024-03-08",
             "importance": 9, "estimated_hours": 0.5, "dependencies": "b, zzz"},
            {"id": "b", "title": "Collect receipts"}
        ]))
        .unwrap();

        let first = &ranked[0];
        assert_eq!(first["id"], json!("a"));
        assert_eq!(first["title"], json!("Pay invoice"));
        assert_eq!(first["due_date"], json!("2024-03-08"));
        assert_eq!(first["estimated_hours"], json!(0.5));
        assert_eq!(first["importance"], json!(9));
        assert_eq!(first["dependencies"], json!(["b", "zzz"]));
        assert!(first["score"].is_f64());
        assert_eq!(
            first["explanation"].as_str().unwrap().split("; ").count(),
            4
        );

        let second = &ranked[1];
        assert_eq!(second["due_date"], Value::Null);
        assert!(second["explanation"]
            .as_str()
            .unwrap()
            .contains("unblocks 1 other task(s)"));
    }

    #[test]
    fn test_exact_scores_at_rounding_boundaries() {
        let ranked = rank_json(json!([
            {"id": 1, "estimated_hours": 7},
            {"id": 2, "importance": 9, "due_date": "2024-03-08", "estimated_hours": 0.5}
        ]))
        .unwrap();
        assert_eq!(ranked[0]["id"], json!(2));
        assert_eq!(ranked[1]["score"], json!(46.12));
    }

    #[test]
    fn test_garbage_fields_degrade_instead_of_failing() {
        let ranked = rank_json(json!([
            "not a record",
            {"title": "", "due_date": "tomorrow", "estimated_hours": "a while",
             "importance": {"level": "high"}, "dependencies": 17},
            null,
            {"title": "Second"}
        ]))
        .unwrap();

        assert_eq!(ranked.as_array().unwrap().len(), 2);
        let untitled = ranked
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["title"] == json!("Untitled task"))
            .unwrap();
        assert_eq!(untitled["id"], json!(1));
        assert_eq!(untitled["due_date"], Value::Null);
        assert_eq!(untitled["estimated_hours"], Value::Null);
        assert_eq!(untitled["importance"], Value::Null);
        assert_eq!(untitled["dependencies"], json!([]));
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_urgent_cheap_important_beats_idle_expensive() {
        let raw = json!([
            {"id": 2, "title": "Read book", "due_date": null, "importance": 2, "estimated_hours": 10},
            {"id": 1, "title": "Pay invoice", "due_date": "2024-03-08", "importance": 9, "estimated_hours": 0.5}
        ]);
        for strategy in Strategy::ALL {
            let ranked = domain().rank(raw.as_array().unwrap(), strategy);
            assert_eq!(ranked[0].title, "Pay invoice", "{strategy}");
        }
    }

    #[test]
    fn test_strategies_change_the_winner() {
        let raw = json!([
            {"id": "quick", "importance": 3, "estimated_hours": 0.25},
            {"id": "vital", "importance": 10, "estimated_hours": 12},
            {"id": "due", "importance": 3, "estimated_hours": 12, "due_date": "2024-03-10"}
        ]);
        let raw = raw.as_array().unwrap();
        let winner = |s| domain().rank(raw, s)[0].id.0.clone();

        assert_eq!(winner(Strategy::FastestWins), json!("quick"));
        assert_eq!(winner(Strategy::HighImpact), json!("vital"));
        assert_eq!(winner(Strategy::DeadlineDriven), json!("due"));
    }

    #[test]
    fn test_circular_dependencies_still_rank() {
        let raw = json!([
            {"id": "a", "dependencies": ["b"]},
            {"id": "b", "dependencies": ["c"]},
            {"id": "c", "dependencies": ["a"]},
            {"id": "d", "dependencies": ["d"]}
        ]);
        let ranked = domain().rank(raw.as_array().unwrap(), Strategy::SmartBalance);
        assert_eq!(ranked.len(), 4);
        assert!(ranked
            .iter()
            .all(|t| t.explanation.contains("circular dependency")));
    }

    #[test]
    fn test_reference_date_is_injected() {
        let raw = json!([{"id": 1, "due_date": "2024-03-12"}]);
        let raw = raw.as_array().unwrap();

        let before = RankingDomain::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .rank(raw, Strategy::DeadlineDriven);
        let after = RankingDomain::new(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
            .rank(raw, Strategy::DeadlineDriven);

        assert!(after[0].score > before[0].score);
        assert!(after[0].explanation.contains("overdue by 8 day(s)"));
    }
}
