//! Error types for task graph operations.
//!
//! Graph shape problems (cycles, references to unknown tasks) are not errors:
//! they are reported through [`Resolution`](crate::Resolution) and the
//! configured reporter. Errors only arise from boundary validation and
//! configuration parsing.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for task graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during task graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// Two tasks in the same list share an identifier.
    #[error("Duplicate task id '{id}' at positions {first} and {second}")]
    #[diagnostic(
        code(taskwave::task::duplicate_id),
        help("set `duplicate_ids = \"tolerate\"` to accept lists with repeated ids")
    )]
    DuplicateTaskId {
        /// The repeated identifier.
        id: String,
        /// Index of the first task with this identifier.
        first: usize,
        /// Index of the later task with the same identifier.
        second: usize,
    },

    /// Resolver configuration could not be parsed.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(taskwave::config::invalid))]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = Error::DuplicateTaskId {
            id: "t1".to_string(),
            first: 0,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate task id 't1' at positions 0 and 3"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("unknown field `foo`");
        assert_eq!(err.to_string(), "Configuration error: unknown field `foo`");
    }
}
