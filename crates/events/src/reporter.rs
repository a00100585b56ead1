//! Injectable diagnostic sinks.
//!
//! The resolver never writes to the console itself. Callers pick a
//! [`Reporter`] to route, record or suppress its diagnostics.

use crate::event::ResolverEvent;
use std::sync::Mutex;

/// A sink for resolver diagnostics.
///
/// Reporting is best-effort: implementations must not panic and have no way
/// to fail the operation that produced the event.
pub trait Reporter: Send + Sync {
    /// Report a single event.
    fn report(&self, event: &ResolverEvent);
}

impl<F> Reporter for F
where
    F: Fn(&ResolverEvent) + Send + Sync,
{
    fn report(&self, event: &ResolverEvent) {
        self(event);
    }
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _event: &ResolverEvent) {}
}

/// Reporter that emits events through `tracing`.
///
/// Completed resolutions and blocked-task snapshots are logged at `info`,
/// stalls at `warn`. Targets are `taskwave::resolve` and `taskwave::blocked`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ResolverEvent) {
        match event {
            ResolverEvent::OrderResolved { order, waves } => {
                crate::emit_order_resolved!(order, waves);
            }
            ResolverEvent::ResolutionStalled(summary) => {
                crate::emit_resolution_stalled!(summary);
            }
            ResolverEvent::TasksBlocked {
                task_ids,
                completed,
            } => {
                crate::emit_tasks_blocked!(task_ids, completed);
            }
        }
    }
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ResolverEvent>>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<ResolverEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of stall events recorded so far.
    #[must_use]
    pub fn stall_count(&self) -> usize {
        self.events
            .lock()
            .map(|guard| guard.iter().filter(|e| e.is_stall()).count())
            .unwrap_or_default()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.events.lock() {
            guard.clear();
        }
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: &ResolverEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::StallSummary;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Level, Subscriber};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    /// Layer that records `(target, event_type)` for every event it sees.
    struct CaptureLayer {
        seen: Arc<Mutex<Vec<(String, Level, String)>>>,
    }

    struct EventTypeVisitor(Option<String>);

    impl Visit for EventTypeVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "event_type" {
                self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = EventTypeVisitor(None);
            event.record(&mut visitor);
            if let Some(event_type) = visitor.0 {
                let metadata = event.metadata();
                self.seen.lock().unwrap().push((
                    metadata.target().to_string(),
                    *metadata.level(),
                    event_type,
                ));
            }
        }
    }

    fn stalled() -> ResolverEvent {
        ResolverEvent::ResolutionStalled(StallSummary {
            resolved: 1,
            total: 2,
            unresolved: vec!["b".to_string()],
            cycles: vec![],
            dangling: vec![("b".to_string(), "missing".to_string())],
        })
    }

    #[test]
    fn test_memory_reporter_records_in_order() {
        let reporter = MemoryReporter::new();
        reporter.report(&ResolverEvent::OrderResolved {
            order: vec!["a".to_string()],
            waves: 1,
        });
        reporter.report(&stalled());

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "resolve.completed");
        assert_eq!(reporter.stall_count(), 1);

        reporter.clear();
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_closure_reporter() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let reporter = move |_: &ResolverEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        reporter.report(&stalled());
        reporter.report(&stalled());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shared_reporter_through_arc() {
        let memory = Arc::new(MemoryReporter::new());
        let shared: Arc<dyn Reporter> = memory.clone();
        shared.report(&stalled());
        assert_eq!(memory.stall_count(), 1);
    }

    #[test]
    fn test_tracing_reporter_targets_and_levels() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { seen: seen.clone() });

        tracing::subscriber::with_default(subscriber, || {
            let reporter = TracingReporter;
            reporter.report(&ResolverEvent::OrderResolved {
                order: vec!["a".to_string(), "b".to_string()],
                waves: 2,
            });
            reporter.report(&stalled());
            reporter.report(&ResolverEvent::TasksBlocked {
                task_ids: vec!["b".to_string()],
                completed: 0,
            });
        });

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (
                    "taskwave::resolve".to_string(),
                    Level::INFO,
                    "resolve.completed".to_string()
                ),
                (
                    "taskwave::resolve".to_string(),
                    Level::WARN,
                    "resolve.stalled".to_string()
                ),
                (
                    "taskwave::blocked".to_string(),
                    Level::INFO,
                    "blocked.computed".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_noop_reporter_is_silent() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { seen: seen.clone() });

        tracing::subscriber::with_default(subscriber, || {
            NoopReporter.report(&stalled());
        });

        assert!(seen.lock().unwrap().is_empty());
    }
}
