//! Reporters that render events to an output stream.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::{TextReporter, TextReporterConfig};
