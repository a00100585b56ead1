//! JSON renderer for resolver events.
//!
//! Renders events as JSON lines for machine consumption.

use crate::event::ResolverEvent;
use crate::reporter::Reporter;
use std::io::{self, Write};
use std::sync::Mutex;

/// Reporter that writes each event as a JSON line.
#[derive(Debug)]
pub struct JsonReporter<W> {
    /// Whether to pretty-print JSON.
    pretty: bool,
    out: Mutex<W>,
}

impl JsonReporter<io::Stdout> {
    /// Create a compact JSON reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonReporter<W> {
    /// Create a new JSON reporter with compact output.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            pretty: false,
            out: Mutex::new(out),
        }
    }

    /// Create a new JSON reporter with pretty-printed output.
    #[must_use]
    pub fn pretty(out: W) -> Self {
        Self {
            pretty: true,
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
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn report(&self, event: &ResolverEvent) {
        let json = if self.pretty {
            serde_json::to_string_pretty(event)
        } else {
            serde_json::to_string(event)
        };

        match json {
            Ok(json) => {
                if let Ok(mut out) = self.out.lock() {
                    let _ = writeln!(out, "{json}");
                }
            }
            Err(e) => tracing::debug!("Failed to serialize resolver event: {}", e),
        }
    }
}
