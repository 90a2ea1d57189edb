//! Dependency graph over task ids and cycle detection.
//!
//! Nodes live in an arena indexed by position of first appearance. Task ids
//! are mapped to nodes through their canonical [`IdKey`], so tasks sharing an
//! id share a node. The last declaration of an id sets that node's edges,
//! while dependents are counted across every declaration.

use std::collections::BTreeMap;

use crate::entities::{IdKey, Task};

/// Adjacency and dependents count for one ranking call
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Outgoing edges per node (node depends on target), in declaration order
    edges: Vec<Vec<usize>>,
    /// How many edges point at each node
    dependents: Vec<usize>,
    /// Node of each task, `None` for tasks without an id
    task_nodes: Vec<Option<usize>>,
}

impl DependencyGraph {
    /// Build the graph for `tasks`. Dependencies naming unknown ids are dropped.
    pub fn build(tasks: &[Task]) -> Self {
        let mut index: BTreeMap<IdKey, usize> = BTreeMap::new();
        let mut task_nodes = Vec::with_capacity(tasks.len());

        for task in tasks {
            if task.id.is_missing() {
                task_nodes.push(None);
                continue;
            }
            let next = index.len();
            let node = *index.entry(task.id.key()).or_insert(next);
            task_nodes.push(Some(node));
        }

        let mut edges = vec![Vec::new(); index.len()];
        let mut dependents = vec![0; index.len()];

        for (task, node) in tasks.iter().zip(&task_nodes) {
            let Some(node) = *node else { continue };
            edges[node].clear();
            for dep in &task.dependencies {
                if let Some(&target) = index.get(&IdKey::of(dep)) {
                    edges[node].push(target);
                    dependents[target] += 1;
                }
            }
        }

        Self {
            edges,
            dependents,
            task_nodes,
        }
    }

    /// Number of distinct nodes
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Graph node of the task at `task_index`
    pub fn node_of(&self, task_index: usize) -> Option<usize> {
        self.task_nodes.get(task_index).copied().flatten()
    }

    /// Outgoing edges of `node`
    pub fn dependencies_of(&self, node: usize) -> &[usize] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges pointing at `node`
    pub fn dependents_of(&self, node: usize) -> usize {
        self.dependents.get(node).copied().unwrap_or(0)
    }

    /// Flag every node that was on the active DFS path when a back-edge
    /// was found.
    ///
    /// This marks the whole path, not just the cycle: in `A -> B -> C -> B`
    /// the ancestor `A` is flagged along with `B` and `C`. Fully visited
    /// nodes are never re-entered, so each edge is followed at most once.
    pub fn detect_cycles(&self) -> CycleSet {
        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut on_path = vec![false; n];
        let mut flagged = vec![false; n];
        // (node, index of the next edge to follow)
        let mut path: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_path[root] = true;
            path.push((root, 0));

            while let Some(frame) = path.last_mut() {
                let node = frame.0;
                let Some(&next) = self.edges[node].get(frame.1) else {
                    on_path[node] = false;
                    path.pop();
                    continue;
                };
                frame.1 += 1;

                if on_path[next] {
                    for &(member, _) in &path {
                        flagged[member] = true;
                    }
                } else if !visited[next] {
                    visited[next] = true;
                    on_path[next] = true;
                    path.push((next, 0));
                }
            }
        }

        let cycles = CycleSet { flagged };
        if !cycles.is_empty() {
            tracing::debug!(
                nodes = cycles.len(),
                "dependency cycle participants detected"
            );
        }
        cycles
    }
}

/// Nodes participating in at least one dependency cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSet {
    flagged: Vec<bool>,
}

impl CycleSet {
    pub fn contains(&self, node: usize) -> bool {
        self.flagged.get(node).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.flagged.iter().filter(|&&f| f).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
