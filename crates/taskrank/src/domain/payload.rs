//! Request payload extraction.
//!
//! Accepts either a bare array of task records or an object carrying
//! `tasks` and an optional `strategy`.

use serde_json::Value;

use super::normalize::is_truthy;
use crate::entities::Strategy;
use crate::errors::{RankError, RankResult};

/// Raw tasks plus the strategy name to rank them with
#[derive(Debug, Clone, PartialEq)]
pub struct RankRequest {
    pub tasks: Vec<Value>,
    /// Trimmed strategy name, defaulted to `smart_balance`
    pub strategy: String,
    /// Whether the payload named a strategy itself
    pub explicit_strategy: bool,
}

impl RankRequest {
    /// Build a request for already-extracted tasks
    pub fn new(tasks: Vec<Value>, strategy: Strategy) -> Self {
        Self {
            tasks,
            strategy: strategy.to_string(),
            explicit_strategy: true,
        }
    }
}

/// Extract tasks and strategy from a decoded request body
pub fn extract_request(payload: Value) -> RankResult<RankRequest> {
    match payload {
        Value::Array(tasks) => Ok(RankRequest {
            tasks,
            strategy: Strategy::default().to_string(),
            explicit_strategy: false,
        }),
        Value::Object(mut map) => {
            let tasks = match map.remove("tasks") {
                Some(Value::Array(tasks)) => tasks,
                Some(value) if is_truthy(&value) => {
                    return Err(RankError::payload(
                        "`tasks` must be a JSON array of task objects",
                    ))
                }
                _ => Vec::new(),
            };

            let (strategy, explicit_strategy) = match map.remove("strategy") {
                Some(Value::String(s)) => {
                    let trimmed = s.trim().to_string();
                    let explicit = !trimmed.is_empty();
                    (trimmed, explicit)
                }
                Some(value) if is_truthy(&value) => {
                    return Err(RankError::payload("`strategy` must be a string"))
                }
                _ => (String::new(), false),
            };

            Ok(RankRequest {
                tasks,
                strategy: if strategy.is_empty() {
                    Strategy::default().to_string()
                } else {
                    strategy
                },
                explicit_strategy,
            })
        }
        _ => Err(RankError::payload("Payload must be a JSON object or array")),
    }
}

/// Decode a JSON document and extract a request from it
pub fn parse_request(body: &str) -> RankResult<RankRequest> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    let payload: Value = serde_json::from_str(body)?;
    extract_request(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_defaults_strategy() {
        let request = extract_request(json!([{"title": "a"}])).unwrap();
        assert_eq!(request.tasks.len(), 1);
        assert_eq!(request.strategy, "smart_balance");
        assert!(!request.explicit_strategy);
    }

    #[test]
    fn test_object_with_strategy_is_trimmed() {
        let request =
            extract_request(json!({"tasks": [], "strategy": "  high_impact "})).unwrap();
        assert_eq!(request.strategy, "high_impact");
        assert!(request.explicit_strategy);
    }

    #[test]
    fn test_object_without_tasks_is_empty() {
        let request = extract_request(json!({"strategy": null})).unwrap();
        assert!(request.tasks.is_empty());
        assert_eq!(request.strategy, "smart_balance");
    }

    #[test]
    fn test_falsy_tasks_are_empty() {
        for tasks in [json!(0), json!(""), json!(false), json!({})] {
            let request = extract_request(json!({ "tasks": tasks })).unwrap();
            assert!(request.tasks.is_empty());
        }
    }

    #[test]
    fn test_unknown_strategy_is_passed_through() {
        let request = extract_request(json!({"tasks": [], "strategy": "bogus"})).unwrap();
        assert_eq!(request.strategy, "bogus");
    }

    #[test]
    fn test_tasks_must_be_array() {
        let err = extract_request(json!({"tasks": {"id": 1}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`tasks` must be a JSON array of task objects"
        );
    }

    #[test]
    fn test_strategy_must_be_string() {
        let err = extract_request(json!({"tasks": [], "strategy": 3})).unwrap_err();
        assert!(matches!(err, RankError::Payload { .. }));
    }

    #[test]
    fn test_scalar_payload_rejected() {
        let err = extract_request(json!("tasks")).unwrap_err();
        assert_eq!(err.to_string(), "Payload must be a JSON object or array");
    }

    #[test]
    fn test_parse_request() {
        assert!(parse_request("").unwrap().tasks.is_empty());
        assert!(matches!(
            parse_request("{not json"),
            Err(RankError::JsonParseError { .. })
        ));
    }
}
