//! Warning sinks for non-fatal ingestion diagnostics.
//!
//! Nothing in this crate aborts: an unreadable directory or a clashing
//! auxiliary file degrades to "no data for this key" plus one formatted
//! warning pushed into a [`WarningSink`]. The driver layer decides where
//! warnings go. [`LogSink`] hands them to `tracing`; callers that want to
//! fold engine warnings into their own reporting (and the tests) use
//! [`CollectedWarnings`].

use tracing::warn;

/// Receives formatted warning text during root ingestion.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

/// Forwards every warning to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&mut self, message: String) {
        warn!("{message}");
    }
}

/// Collects warnings in memory for later draining.
#[derive(Clone, Debug, Default)]
pub struct CollectedWarnings {
    warnings: Vec<String>,
}

impl CollectedWarnings {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings collected so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Take all warnings, leaving the collector empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Number of collected warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Check if anything was collected.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}
