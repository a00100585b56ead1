//! Event type definitions for resolver diagnostics.
//!
//! Events are plain owned data so reporters can keep, forward or serialize
//! them without borrowing from the task list that produced them.

use serde::{Deserialize, Serialize};

/// A diagnostic event emitted by the order resolver or blocked-task analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ResolverEvent {
    /// Every task was placed in the execution order.
    OrderResolved {
        /// Task identifiers in execution order.
        order: Vec<String>,
        /// Number of rounds (waves) it took to resolve the order.
        waves: usize,
    },
    /// Resolution stopped before every task could be placed.
    ResolutionStalled(StallSummary),
    /// Blocked tasks were computed for a set of completed tasks.
    TasksBlocked {
        /// Identifiers of the blocked tasks, in input order.
        task_ids: Vec<String>,
        /// Number of identifiers that were considered completed.
        completed: usize,
    },
}

impl ResolverEvent {
    /// Stable dotted name for the event, used as the `event_type` field in logs.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::OrderResolved { .. } => "resolve.completed",
            Self::ResolutionStalled(_) => "resolve.stalled",
            Self::TasksBlocked { .. } => "blocked.computed",
        }
    }

    /// Whether this event signals an unsatisfiable dependency set.
    #[must_use]
    pub const fn is_stall(&self) -> bool {
        matches!(self, Self::ResolutionStalled(_))
    }
}

/// Details of a stalled resolution.
///
/// `cycles` and `dangling` are a best-effort classification of why the
/// unresolved tasks never became eligible, and only ever name unresolved
/// tasks. Both are empty when the classification was disabled or when only
/// duplicate identifiers caused the stall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StallSummary {
    /// Number of distinct identifiers that were resolved.
    pub resolved: usize,
    /// Number of tasks in the input list.
    pub total: usize,
    /// Identifiers of tasks that never became eligible, in input order.
    pub unresolved: Vec<String>,
    /// Groups of unresolved task identifiers whose dependencies form a closed loop.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycles: Vec<Vec<String>>,
    /// `(task, dependency)` pairs for unresolved tasks whose dependency names no
    /// task in the list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dangling: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let resolved = ResolverEvent::OrderResolved {
            order: vec!["a".to_string()],
            waves: 1,
        };
        assert_eq!(resolved.event_type(), "resolve.completed");
        assert!(!resolved.is_stall());

        let stalled = ResolverEvent::ResolutionStalled(StallSummary::default());
        assert_eq!(stalled.event_type(), "resolve.stalled");
        assert!(stalled.is_stall());
    }

    #[test]
    fn test_event_serialization() {
        let event = ResolverEvent::ResolutionStalled(StallSummary {
            resolved: 0,
            total: 3,
            unresolved: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            cycles: vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]],
            dangling: vec![],
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"ResolutionStalled\""));
        assert!(json.contains("\"total\":3"));
        assert!(!json.contains("dangling"));

        let parsed: ResolverEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_blocked_event_serialization() {
        let event = ResolverEvent::TasksBlocked {
            task_ids: vec!["t2".to_string()],
            completed: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TasksBlocked"));
        assert!(json.contains("t2"));
    }
}
