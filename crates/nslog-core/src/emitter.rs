//! Line rendering and dispatch to the sink.
//!
//! A rendered line looks like `[14:03:07.042] app.ui - WARNING - message`.
//! Each prefix segment is optional: the timestamp and namespace follow the
//! active [`Options`], the namespace is never shown for the root logger, and
//! level-less calls carry no level segment. A call-site suffix such as
//! ` (src/main.rs:12)` is appended when enabled and a strategy is installed.

use crate::{term, time};
use chrono::NaiveTime;
use nslog_types::{CallSiteStrategy, Level, Namespace, Options, Sink};
use std::fmt::Write as _;
use std::panic::Location;
use std::sync::Arc;

/// One accepted log call, ready to render.
pub struct Record<'a> {
    /// Level of the call, `None` for level-less calls
    pub level: Option<Level>,
    /// Namespace of the emitting logger
    pub namespace: &'a Namespace,
    /// The formatted message
    pub message: &'a str,
    /// Where the call was made
    pub location: &'static Location<'static>,
}

/// Renders records and writes them to the injected sink.
pub struct Emitter {
    sink: Option<Arc<dyn Sink>>,
    call_site: Option<Box<dyn CallSiteStrategy>>,
}

impl Emitter {
    /// Create an emitter; either collaborator may be absent.
    pub fn new(sink: Option<Arc<dyn Sink>>, call_site: Option<Box<dyn CallSiteStrategy>>) -> Self {
        Self { sink, call_site }
    }

    /// Whether a sink is present and currently accepting lines.
    pub fn is_available(&self) -> bool {
        self.sink.as_ref().map_or(false, |sink| sink.is_available())
    }

    /// Render a record using the current wall-clock time.
    pub fn render(&self, options: &Options, record: &Record<'_>) -> String {
        self.render_at(options, record, time::now())
    }

    /// Render a record with an explicit timestamp.
    pub fn render_at(&self, options: &Options, record: &Record<'_>, at: NaiveTime) -> String {
        let mut line = String::new();

        if options.show_timestamp {
            let _ = write!(line, "[{}] ", time::clock_stamp(at));
        }
        if options.show_namespace && !record.namespace.is_root() {
            let _ = write!(line, "{} - ", record.namespace.display_path());
        }
        if let Some(level) = record.level {
            if options.color {
                let _ = write!(line, "{} - ", term::paint_level(level));
            } else {
                let _ = write!(line, "{} - ", level.label());
            }
        }
        line.push_str(record.message);

        if options.show_call_site {
            if let Some(site) = self
                .call_site
                .as_ref()
                .and_then(|strategy| strategy.describe(record.location))
            {
                let _ = write!(line, " ({})", site);
            }
        }

        line
    }

    /// Hand a rendered line to the sink, if any.
    pub fn write(&self, level: Option<Level>, line: &str) {
        if let Some(sink) = &self.sink {
            sink.write(level, line);
        }
    }
}

/// Describes a call site as `file:line` using the caller location.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCallSite;

impl CallSiteStrategy for LocationCallSite {
    fn describe(&self, location: &'static Location<'static>) -> Option<String> {
        Some(format!("{}:{}", location.file(), location.line()))
    }
}
