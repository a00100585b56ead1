//! Task input and blocked-task output types.

use crate::TaskNodeData;
use serde::{Deserialize, Serialize};

/// A unit of work with prerequisite tasks referenced by identifier.
///
/// Dependency identifiers are not required to name a task in the same list;
/// such references are never satisfiable and keep the task unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, expected to be unique within a task list.
    pub id: String,
    /// Display name, used for diagnostics only.
    #[serde(default)]
    pub name: String,
    /// Identifiers of the tasks that must be resolved first.
    #[serde(default, alias = "depends_on")]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Create a task with no dependencies.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    /// Replace this task's dependencies.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

impl TaskNodeData for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }
}

/// A task that cannot start because some of its dependencies are not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedInfo {
    /// Identifier of the blocked task.
    pub task_id: String,
    /// Display name of the blocked task.
    pub task_name: String,
    /// Declared dependencies missing from the completed set, in declaration order.
    pub missing_dependencies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("t4", "Build Frontend").with_dependencies(["t2", "t3"]);
        assert_eq!(task.id(), "t4");
        assert_eq!(task.name(), "Build Frontend");
        assert_eq!(task.dependency_names().collect::<Vec<_>>(), vec!["t2", "t3"]);
    }

    #[test]
    fn test_task_deserialize_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": "t1"}"#).unwrap();
        assert_eq!(task, Task::new("t1", ""));
    }

    #[test]
    fn test_task_deserialize_depends_on_alias() {
        let task: Task =
            serde_json::from_str(r#"{"id": "t2", "name": "Build API", "depends_on": ["t1"]}"#)
                .unwrap();
        assert_eq!(task.dependencies, vec!["t1".to_string()]);
    }

    #[test]
    fn test_task_list_from_toml() {
        #[derive(Deserialize)]
        struct TaskFile {
            tasks: Vec<Task>,
        }

        let file: TaskFile = toml::from_str(
            r#"
            [[tasks]]
            id = "t1"
            name = "Setup DB"

            [[tasks]]
            id = "t2"
            name = "Build API"
            dependencies = ["t1"]
            "#,
        )
        .unwrap();

        assert_eq!(file.tasks.len(), 2);
        assert_eq!(file.tasks[1].dependencies, vec!["t1".to_string()]);
    }

    #[test]
    fn test_blocked_info_serialization() {
        let info = BlockedInfo {
            task_id: "t2".to_string(),
            task_name: "Build API".to_string(),
            missing_dependencies: vec!["t1".to_string()],
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"missing_dependencies\":[\"t1\"]"));
    }
}
