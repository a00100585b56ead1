//! Layered dependency resolution and blocked-task analysis for taskwave.
//!
//! This crate computes an execution order for tasks related by dependency
//! constraints, and reports which tasks are blocked given a set of completed
//! tasks. Both operations are pure functions of their inputs; diagnostics are
//! sent to an injectable [`Reporter`](taskwave_events::Reporter).
//!
//! # Key Types
//!
//! - [`Task`]: Input task with an identifier, display name and dependencies
//! - [`TaskNodeData`]: Trait for caller-defined task types
//! - [`Resolution`]: Order, waves and stall details of a resolution
//! - [`BlockedInfo`]: A blocked task and the dependencies it waits on
//! - [`Resolver`]: Configured resolver with its own reporter
//!
//! # Example
//!
//! ```ignore
//! use taskwave_task_graph::{Task, blocked_tasks, resolve_order};
//!
//! let tasks = vec![
//!     Task::new("t1", "Setup DB"),
//!     Task::new("t2", "Build API").with_dependencies(["t1"]),
//!     Task::new("t3", "Auth Module").with_dependencies(["t1"]),
//! ];
//!
//! assert_eq!(resolve_order(&tasks), vec!["t1", "t2", "t3"]);
//!
//! let blocked = blocked_tasks(&tasks, &["t2"]);
//! assert_eq!(blocked[0].task_id, "t3");
//! ```

mod blocked;
mod config;
mod error;
mod graph;
mod resolver;
mod task;
mod validation;

pub use blocked::{blocked_tasks, blocked_tasks_with};
pub use config::{DuplicatePolicy, ResolverConfig};
pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use resolver::{Resolution, Resolver, Wave, resolve, resolve_order};
pub use task::{BlockedInfo, Task};
pub use taskwave_events::StallSummary;
pub use validation::{ValidationResult, validate_tasks};

/// Trait for task data that can be resolved.
///
/// Implement this trait for your own task type to resolve it without
/// converting to [`Task`].
pub trait TaskNodeData {
    /// Returns the task identifier.
    fn id(&self) -> &str;

    /// Returns the display name. Defaults to the identifier.
    fn name(&self) -> &str {
        self.id()
    }

    /// Returns the identifiers of tasks this task depends on.
    fn dependency_names(&self) -> impl Iterator<Item = &str>;
}
