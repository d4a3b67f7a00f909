//! Diagnostic sink for skipped-row reports.
//!
//! The loader emits one textual diagnostic per rejected row. Rather than
//! writing to an ambient global, the sink is an explicit parameter with a
//! stderr default, so tests can capture diagnostics deterministically.

use tracing::warn;

/// Receiver for loader diagnostics, one message per skipped row.
pub trait DiagnosticSink {
    /// Record a single diagnostic message.
    fn report(&mut self, message: &str);
}

/// Default sink: writes each diagnostic as a line on standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Sink that forwards diagnostics to the `tracing` pipeline at WARN level.
///
/// Used by the demo binary so skipped rows show up in the configured
/// subscriber instead of as bare stderr lines.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// Sink that collects diagnostics in memory, for test assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostics recorded so far, in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
