//! Diagnostic events for taskwave dependency resolution.
//!
//! The resolver and blocked-task analyzer report what they find (a resolved
//! order, a stalled resolution, a blocked-task snapshot) as typed
//! [`ResolverEvent`]s. Where those events go is decided by the caller through
//! the [`Reporter`] trait:
//!
//! - [`TracingReporter`]: structured `tracing` events (the default)
//! - [`NoopReporter`]: suppress diagnostics
//! - [`MemoryReporter`]: keep events for later inspection
//! - [`TextReporter`] / [`JsonReporter`]: render to any `io::Write`
//!
//! # Usage
//!
//! ```rust,ignore
//! use taskwave_events::{MemoryReporter, Reporter, ResolverEvent};
//!
//! let reporter = MemoryReporter::new();
//! reporter.report(&ResolverEvent::OrderResolved { order: vec![], waves: 0 });
//! assert_eq!(reporter.events().len(), 1);
//! ```

pub mod event;
pub mod renderers;
pub mod reporter;

// Re-exports for convenience
pub use event::{ResolverEvent, StallSummary};
pub use renderers::{JsonReporter, TextReporter, TextReporterConfig};
pub use reporter::{MemoryReporter, NoopReporter, Reporter, TracingReporter};

// ============================================================================
// Emit Macros
// ============================================================================

/// Emit a resolution completed event.
///
/// # Example
/// ```rust,ignore
/// emit_order_resolved!(order, 3);
/// ```
#[macro_export]
macro_rules! emit_order_resolved {
    ($order:expr, $waves:expr) => {
        ::tracing::info!(
            target: "taskwave::resolve",
            event_type = "resolve.completed",
            task_count = $order.len(),
            waves = $waves,
            order = ?$order,
        )
    };
}

/// Emit a resolution stalled event for a [`StallSummary`].
#[macro_export]
macro_rules! emit_resolution_stalled {
    ($summary:expr) => {
        ::tracing::warn!(
            target: "taskwave::resolve",
            event_type = "resolve.stalled",
            resolved = $summary.resolved,
            total = $summary.total,
            unresolved = ?$summary.unresolved,
            cycles = ?$summary.cycles,
            dangling = ?$summary.dangling,
            "Cyclic dependency detected"
        )
    };
}

/// Emit a blocked tasks computed event.
#[macro_export]
macro_rules! emit_tasks_blocked {
    ($task_ids:expr, $completed:expr) => {
        ::tracing::info!(
            target: "taskwave::blocked",
            event_type = "blocked.computed",
            blocked_count = $task_ids.len(),
            completed = $completed,
            task_ids = ?$task_ids,
        )
    };
}
