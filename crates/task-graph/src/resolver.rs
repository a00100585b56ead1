//! Layered dependency resolution.
//!
//! Tasks are resolved round by round. Each round scans the whole list in
//! input order and resolves every task whose dependencies were all resolved
//! in earlier rounds. The tasks resolved in one round form a wave: they do
//! not depend on each other and could run in parallel.
//!
//! A round that resolves nothing ends the resolution. If tasks remain at that
//! point the dependency set is unsatisfiable, either because of a cycle or
//! because a dependency names a task that is not in the list. Both cases are
//! handled the same way: the partial order is returned and a stall is
//! reported. Neither is an error.

use crate::graph::DependencyGraph;
use crate::validation::validate_tasks;
use crate::{BlockedInfo, DuplicatePolicy, Result, ResolverConfig, TaskNodeData};
use std::collections::HashSet;
use std::sync::Arc;
use taskwave_events::{Reporter, ResolverEvent, StallSummary, TracingReporter};
use tracing::debug;

/// Task identifiers resolved in the same round.
pub type Wave = Vec<String>;

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Task identifiers in execution order.
    pub order: Vec<String>,
    /// The same identifiers grouped by the round that resolved them.
    pub waves: Vec<Wave>,
    /// Identifiers that never became eligible, in input order.
    pub unresolved: Vec<String>,
    /// Why resolution stopped early. `None` when every task was resolved.
    pub stall: Option<StallSummary>,
}

impl Resolution {
    /// Whether every task in the input was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stall.is_none()
    }

    /// Consume the resolution, keeping only the flat order.
    #[must_use]
    pub fn into_order(self) -> Vec<String> {
        self.order
    }
}

/// Compute an execution order for `tasks`.
///
/// Diagnostics go to [`TracingReporter`]. The returned order may be shorter
/// than the input if resolution stalled; use [`resolve`] to find out why.
#[must_use]
pub fn resolve_order<T: TaskNodeData>(tasks: &[T]) -> Vec<String> {
    resolve(tasks, &TracingReporter).into_order()
}

/// Resolve `tasks` into waves, reporting the outcome to `reporter`.
///
/// Runs at most `tasks.len()` rounds. Within a round, eligible tasks keep
/// their relative input order. Stalls are classified into cycles and
/// unknown dependencies.
pub fn resolve<T: TaskNodeData>(tasks: &[T], reporter: &dyn Reporter) -> Resolution {
    resolve_with(tasks, reporter, true)
}

fn resolve_with<T: TaskNodeData>(
    tasks: &[T],
    reporter: &dyn Reporter,
    analyze_stalls: bool,
) -> Resolution {
    let total = tasks.len();
    let mut resolved: HashSet<&str> = HashSet::new();
    let mut waves: Vec<Wave> = Vec::new();

    for round in 0..total {
        let eligible: Vec<&str> = tasks
            .iter()
            .filter(|task| {
                !resolved.contains(task.id())
                    && task.dependency_names().all(|dep| resolved.contains(dep))
            })
            .map(TaskNodeData::id)
            .collect();

        if eligible.is_empty() {
            debug!("Round {} resolved no tasks", round);
            break;
        }

        debug!("Round {} resolved {:?}", round, eligible);
        resolved.extend(eligible.iter().copied());
        waves.push(eligible.into_iter().map(String::from).collect());
    }

    let order: Vec<String> = waves.iter().flatten().cloned().collect();

    let mut seen = HashSet::new();
    let unresolved: Vec<String> = tasks
        .iter()
        .map(TaskNodeData::id)
        .filter(|id| !resolved.contains(id) && seen.insert(*id))
        .map(String::from)
        .collect();

    // Distinct ids are counted, so a list with repeated ids never completes.
    let stall = (resolved.len() < total).then(|| {
        let mut summary = StallSummary {
            resolved: resolved.len(),
            total,
            unresolved: unresolved.clone(),
            ..StallSummary::default()
        };
        if analyze_stalls {
            // Duplicates share a node, so the graph can hold cycles among resolved ids.
            let stuck: HashSet<&str> = unresolved.iter().map(String::as_str).collect();
            let graph = DependencyGraph::from_tasks(tasks);
            summary.cycles = graph
                .cycles()
                .into_iter()
                .filter(|cycle| cycle.iter().all(|id| stuck.contains(id.as_str())))
                .collect();
            summary.dangling = graph
                .dangling()
                .iter()
                .filter(|(task, _)| stuck.contains(task.as_str()))
                .cloned()
                .collect();
        }
        summary
    });

    match &stall {
        Some(summary) => reporter.report(&ResolverEvent::ResolutionStalled(summary.clone())),
        None => reporter.report(&ResolverEvent::OrderResolved {
            order: order.clone(),
            waves: waves.len(),
        }),
    }

    Resolution {
        order,
        waves,
        unresolved,
        stall,
    }
}

/// Resolver bundling a configuration and a diagnostic reporter.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use taskwave_events::MemoryReporter;
/// use taskwave_task_graph::{Resolver, ResolverConfig, Task};
///
/// let reporter = Arc::new(MemoryReporter::new());
/// let resolver = Resolver::with_config(ResolverConfig::default())
///     .with_reporter(reporter.clone());
///
/// let tasks = vec![
///     Task::new("build", "Build"),
///     Task::new("test", "Test").with_dependencies(["build"]),
/// ];
/// let resolution = resolver.resolve(&tasks)?;
/// assert_eq!(resolution.order, vec!["build", "test"]);
/// ```
#[derive(Clone)]
pub struct Resolver {
    config: ResolverConfig,
    reporter: Arc<dyn Reporter>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with default configuration that reports via tracing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create a resolver with the given configuration that reports via tracing.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replace the diagnostic reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `tasks` into an execution order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTaskId`](crate::Error::DuplicateTaskId) if the
    /// configuration rejects repeated identifiers and `tasks` contains one.
    /// Cycles and unknown dependencies are reported in the [`Resolution`].
    pub fn resolve<T: TaskNodeData>(&self, tasks: &[T]) -> Result<Resolution> {
        self.check_duplicates(tasks)?;
        Ok(resolve_with(
            tasks,
            self.reporter.as_ref(),
            self.config.analyze_stalls,
        ))
    }

    /// Report every incomplete task with unsatisfied dependencies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTaskId`](crate::Error::DuplicateTaskId) if the
    /// configuration rejects repeated identifiers and `tasks` contains one.
    pub fn blocked<T, S>(&self, tasks: &[T], completed: &[S]) -> Result<Vec<BlockedInfo>>
    where
        T: TaskNodeData,
        S: AsRef<str>,
    {
        self.check_duplicates(tasks)?;
        Ok(crate::blocked::blocked_tasks_with(
            tasks,
            completed,
            self.reporter.as_ref(),
        ))
    }

    fn check_duplicates<T: TaskNodeData>(&self, tasks: &[T]) -> Result<()> {
        if self.config.duplicate_ids == DuplicatePolicy::Tolerate {
            return Ok(());
        }
        match validate_tasks(tasks).errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
