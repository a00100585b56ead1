//! Validation utilities for task lists.
//!
//! Validation never changes how a list is resolved. It lets callers reject
//! lists at the boundary (see [`DuplicatePolicy`](crate::DuplicatePolicy)) or
//! surface problems before resolving.

use crate::{Error, TaskNodeData};
use std::collections::{HashMap, HashSet};

/// Result of task list validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the list is valid (no duplicate identifiers).
    pub is_valid: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
    /// `(task, dependency)` pairs naming no task in the list.
    ///
    /// These never invalidate a list; the task simply never resolves.
    pub dangling: Vec<(String, String)>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
            dangling: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            errors,
            dangling: vec![],
        }
    }
}

/// Validate a task list.
///
/// Checks for:
/// - Repeated task identifiers (errors, one per repeat)
/// - Dependencies on identifiers absent from the list (warnings)
///
/// Empty lists and empty identifiers are valid.
#[must_use]
pub fn validate_tasks<T: TaskNodeData>(tasks: &[T]) -> ValidationResult {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        if let Some(&first) = first_seen.get(task.id()) {
            errors.push(Error::DuplicateTaskId {
                id: task.id().to_string(),
                first,
                second: index,
            });
        } else {
            first_seen.insert(task.id(), index);
        }
    }

    let mut seen_dangling = HashSet::new();
    let dangling = tasks
        .iter()
        .flat_map(|task| task.dependency_names().map(move |dep| (task.id(), dep)))
        .filter(|(_, dep)| !first_seen.contains_key(dep))
        .filter(|pair| seen_dangling.insert(*pair))
        .map(|(task, dep)| (task.to_string(), dep.to_string()))
        .collect();

    let mut result = if errors.is_empty() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(errors)
    };
    result.dangling = dangling;
    result
}
