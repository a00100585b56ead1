//! Identifier graph built with petgraph.
//!
//! The layered resolver does not need an explicit graph. This module is used
//! after a resolution stalls, to explain why: which tasks form dependency
//! cycles and which dependencies name no task at all.

use crate::TaskNodeData;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Directed graph of task identifiers.
///
/// Edges point from a dependency to the task that depends on it. Repeated
/// identifiers share a single node; node order follows first occurrence in
/// the input list.
#[derive(Debug)]
pub struct DependencyGraph {
    /// The directed graph of task identifiers.
    graph: DiGraph<String, ()>,
    /// Map from task identifiers to node indices.
    id_to_node: HashMap<String, NodeIndex>,
    /// `(task, dependency)` pairs whose dependency is not in the graph.
    dangling: Vec<(String, String)>,
}

impl DependencyGraph {
    /// Build the graph for a task list.
    #[must_use]
    pub fn from_tasks<T: TaskNodeData>(tasks: &[T]) -> Self {
        let mut graph = DiGraph::new();
        let mut id_to_node = HashMap::new();

        for task in tasks {
            if !id_to_node.contains_key(task.id()) {
                let node = graph.add_node(task.id().to_string());
                id_to_node.insert(task.id().to_string(), node);
            }
        }

        let mut dangling = Vec::new();
        let mut seen_dangling = HashSet::new();

        for task in tasks {
            let Some(&node) = id_to_node.get(task.id()) else {
                continue;
            };
            for dep in task.dependency_names() {
                if let Some(&dep_node) = id_to_node.get(dep) {
                    graph.update_edge(dep_node, node, ());
                } else if seen_dangling.insert((task.id(), dep)) {
                    debug!("Task '{}' depends on unknown task '{}'", task.id(), dep);
                    dangling.push((task.id().to_string(), dep.to_string()));
                }
            }
        }

        Self {
            graph,
            id_to_node,
            dangling,
        }
    }

    /// Number of distinct task identifiers.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Check if a task identifier is in the graph.
    #[must_use]
    pub fn contains_task(&self, id: &str) -> bool {
        self.id_to_node.contains_key(id)
    }

    /// Check if the graph has cycles.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Dependencies that reference identifiers absent from the task list.
    #[must_use]
    pub fn dangling(&self) -> &[(String, String)] {
        &self.dangling
    }

    /// Groups of identifiers whose dependencies form closed loops.
    ///
    /// Each group is a strongly connected component with more than one task,
    /// or a single task that depends on itself. Members are listed in input
    /// order and groups are ordered by their first member. Repeated ids share
    /// a node, so a group may include ids that some copy could still resolve.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&node| self.graph.contains_edge(node, node))
            })
            .map(|mut component| {
                component.sort_unstable();
                component
            })
            .collect();
        components.sort_unstable_by_key(|component| component.first().copied());

        components
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|node| self.graph[node].clone())
                    .collect()
            })
            .collect()
    }
}
