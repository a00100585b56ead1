//! Human-readable renderer for resolver events.

use crate::event::{ResolverEvent, StallSummary};
use crate::reporter::Reporter;
use std::io::{self, Write};
use std::sync::Mutex;

/// Text renderer configuration.
#[derive(Debug, Clone, Default)]
pub struct TextReporterConfig {
    /// Whether to also print each wave count and cycle/dangling details.
    pub verbose: bool,
}

/// Reporter that writes one human-readable line per event.
///
/// Write failures are ignored; diagnostics never fail resolution.
#[derive(Debug)]
pub struct TextReporter<W> {
    config: TextReporterConfig,
    out: Mutex<W>,
}

impl TextReporter<io::Stderr> {
    /// Create a reporter that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TextReporter<W> {
    /// Create a reporter writing to the given sink with default configuration.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self::with_config(out, TextReporterConfig::default())
    }

    /// Create a reporter writing to the given sink.
    #[must_use]
    pub fn with_config(out: W, config: TextReporterConfig) -> Self {
        Self {
            config,
            out: Mutex::new(out),
        }
    }

    /// Consume the reporter and return the underlying sink.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn render(&self, event: &ResolverEvent) -> String {
        match event {
            ResolverEvent::OrderResolved { order, waves } => {
                if self.config.verbose {
                    format!("Resolved order ({waves} waves): [{}]", order.join(", "))
                } else {
                    format!("Resolved order: [{}]", order.join(", "))
                }
            }
            ResolverEvent::ResolutionStalled(summary) => self.render_stall(summary),
            ResolverEvent::TasksBlocked {
                task_ids,
                completed,
            } => {
                if task_ids.is_empty() {
                    format!("No blocked tasks ({completed} completed)")
                } else {
                    format!(
                        "Blocked tasks ({completed} completed): [{}]",
                        task_ids.join(", ")
                    )
                }
            }
        }
    }

    fn render_stall(&self, summary: &StallSummary) -> String {
        let mut line = format!(
            "Cyclic dependency detected: resolved {} of {} tasks, unresolved [{}]",
            summary.resolved,
            summary.total,
            summary.unresolved.join(", ")
        );
        if self.config.verbose {
            for cycle in &summary.cycles {
                line.push_str(&format!("\n  cycle: {}", cycle.join(" -> ")));
            }
            for (task, dep) in &summary.dangling {
                line.push_str(&format!("\n  '{task}' depends on unknown task '{dep}'"));
            }
        }
        line
    }
}

impl<W: Write + Send> Reporter for TextReporter<W> {
    fn report(&self, event: &ResolverEvent) {
        let line = self.render(event);
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }
}
