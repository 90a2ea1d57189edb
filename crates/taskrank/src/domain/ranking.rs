//! Ranking domain facade.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde_json::Value;

use super::factors;
use super::graph::DependencyGraph;
use super::normalize::normalize_tasks;
use super::payload::RankRequest;
use crate::entities::{FactorScores, ScoredTask, Strategy};
use crate::errors::RankResult;

/// Days-until-due used for tasks without a due date when ordering
pub const NO_DUE_DATE_SENTINEL: i64 = 99_999;

/// Ranking facade bound to a reference date.
///
/// Holds no state besides the date, so one instance can serve any number
/// of independent calls.
#[derive(Debug, Clone, Copy)]
pub struct RankingDomain {
    today: NaiveDate,
}

impl RankingDomain {
    /// Create a ranking domain that scores urgency against `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Reference date used for urgency and ordering
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Rank raw task records under `strategy`
    pub fn rank(&self, raw: &[Value], strategy: Strategy) -> Vec<ScoredTask> {
        let tasks = normalize_tasks(raw);
        let graph = DependencyGraph::build(&tasks);
        let cycles = graph.detect_cycles();
        let weights = strategy.weights();

        tracing::debug!(
            raw = raw.len(),
            tasks = tasks.len(),
            nodes = graph.node_count(),
            strategy = %strategy,
            "ranking tasks"
        );

        let mut scored: Vec<ScoredTask> = tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| {
                let node = graph.node_of(i);
                let factors = FactorScores {
                    urgency: factors::urgency(task.due_date, self.today),
                    importance: factors::importance(task.importance),
                    effort: factors::effort(task.estimated_hours),
                    dependency: factors::dependency(
                        node.map(|n| graph.dependents_of(n)),
                        node.is_some_and(|n| cycles.contains(n)),
                    ),
                };
                let composite = weights.combine(
                    factors.urgency.score,
                    factors.importance.score,
                    factors.effort.score,
                    factors.dependency.score,
                );
                ScoredTask::new(task, composite, factors)
            })
            .collect();

        // stable: equal keys keep input order
        scored.sort_by(|a, b| self.compare(a, b));
        scored
    }

    /// Rank under a strategy given by name; blank names select the default
    pub fn rank_named(&self, raw: &[Value], strategy: &str) -> RankResult<Vec<ScoredTask>> {
        let strategy: Strategy = strategy.parse()?;
        Ok(self.rank(raw, strategy))
    }

    /// Rank a request extracted from a payload
    pub fn rank_request(&self, request: &RankRequest) -> RankResult<Vec<ScoredTask>> {
        self.rank_named(&request.tasks, &request.strategy)
    }

    /// Top `limit` tasks of the ranking
    pub fn suggest(&self, raw: &[Value], strategy: Strategy, limit: usize) -> Vec<ScoredTask> {
        let mut ranked = self.rank(raw, strategy);
        ranked.truncate(limit);
        ranked
    }

    /// Top `limit` tasks of a request extracted from a payload
    pub fn suggest_request(
        &self,
        request: &RankRequest,
        limit: usize,
    ) -> RankResult<Vec<ScoredTask>> {
        let mut ranked = self.rank_request(request)?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Descending score, then soonest due, then most important
    fn compare(&self, a: &ScoredTask, b: &ScoredTask) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| self.due_weight(a).cmp(&self.due_weight(b)))
            .then_with(|| b.importance.unwrap_or(0).cmp(&a.importance.unwrap_or(0)))
    }

    fn due_weight(&self, task: &ScoredTask) -> i64 {
        task.due_date
            .map_or(NO_DUE_DATE_SENTINEL, |due| (due - self.today).num_days())
    }
}
