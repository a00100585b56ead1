//! Blocked-task analysis.
//!
//! A point-in-time query: given the identifiers already completed, which
//! incomplete tasks still wait on at least one dependency? This is
//! independent of the order resolver and performs no cycle detection.

use crate::{BlockedInfo, TaskNodeData};
use std::collections::HashSet;
use taskwave_events::{Reporter, ResolverEvent, TracingReporter};
use tracing::debug;

/// Report every incomplete task with unsatisfied dependencies.
///
/// Diagnostics go to [`TracingReporter`]. See [`blocked_tasks_with`].
#[must_use]
pub fn blocked_tasks<T, S>(tasks: &[T], completed: &[S]) -> Vec<BlockedInfo>
where
    T: TaskNodeData,
    S: AsRef<str>,
{
    blocked_tasks_with(tasks, completed, &TracingReporter)
}

/// Report every incomplete task with unsatisfied dependencies.
///
/// Tasks whose identifier is in `completed` are skipped. For every other task
/// the declared dependencies missing from `completed` are collected in
/// declaration order; a task is reported only if at least one is missing, so
/// a task with no dependencies is never blocked. Output follows input order.
/// Repeated entries in `completed` are harmless.
pub fn blocked_tasks_with<T, S>(
    tasks: &[T],
    completed: &[S],
    reporter: &dyn Reporter,
) -> Vec<BlockedInfo>
where
    T: TaskNodeData,
    S: AsRef<str>,
{
    let completed_set: HashSet<&str> = completed.iter().map(AsRef::as_ref).collect();

    let blocked: Vec<BlockedInfo> = tasks
        .iter()
        .filter(|task| !completed_set.contains(task.id()))
        .filter_map(|task| {
            let missing_dependencies: Vec<String> = task
                .dependency_names()
                .filter(|dep| !completed_set.contains(dep))
                .map(String::from)
                .collect();

            if missing_dependencies.is_empty() {
                return None;
            }

            debug!(
                "Task '{}' blocked on {:?}",
                task.id(),
                missing_dependencies
            );
            Some(BlockedInfo {
                task_id: task.id().to_string(),
                task_name: task.name().to_string(),
                missing_dependencies,
            })
        })
        .collect();

    reporter.report(&ResolverEvent::TasksBlocked {
        task_ids: blocked.iter().map(|info| info.task_id.clone()).collect(),
        completed: completed_set.len(),
    });

    blocked
}
