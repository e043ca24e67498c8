//! Built-in sinks.

use nslog_types::{Level, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes lines to the process console.
///
/// `warning` and above go to stderr; everything else, level-less calls
/// included, goes to stdout. Write failures are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }

    /// Whether lines at `level` are routed to stderr.
    pub fn uses_stderr(level: Option<Level>) -> bool {
        level.map_or(false, |level| level >= Level::Warning)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, level: Option<Level>, line: &str) {
        let _ = if Self::uses_stderr(level) {
            writeln!(io::stderr().lock(), "{}", line)
        } else {
            writeln!(io::stdout().lock(), "{}", line)
        };
    }
}

/// A captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    /// Level of the call, `None` for level-less calls
    pub level: Option<Level>,
    /// Rendered text
    pub line: String,
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured records.
    pub fn records(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured text only.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|c| c.line.clone()).collect()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop every captured line.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, level: Option<Level>, line: &str) {
        self.lines.lock().push(CapturedLine {
            level,
            line: line.to_string(),
        });
    }
}

/// Forwards lines as `tracing` events under the `nslog` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink.
    pub fn new() -> Self {
        Self
    }

    /// The tracing level a call is forwarded at.
    pub fn tracing_level(level: Option<Level>) -> tracing::Level {
        match level {
            Some(Level::All) | Some(Level::Debug) => tracing::Level::DEBUG,
            Some(Level::Info) | None => tracing::Level::INFO,
            Some(Level::Warning) => tracing::Level::WARN,
            Some(Level::Error) | Some(Level::Fatal) => tracing::Level::ERROR,
        }
    }
}

impl Sink for TracingSink {
    fn write(&self, level: Option<Level>, line: &str) {
        // Event levels must be constants, hence the repeated mapping.
        match level {
            Some(Level::All) | Some(Level::Debug) => tracing::debug!(target: "nslog", "{}", line),
            Some(Level::Info) | None => tracing::info!(target: "nslog", "{}", line),
            Some(Level::Warning) => tracing::warn!(target: "nslog", "{}", line),
            Some(Level::Error) | Some(Level::Fatal) => tracing::error!(target: "nslog", "{}", line),
        }
    }
}
