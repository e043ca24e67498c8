//! Logger handles.
//!
//! A [`Logger`] is a cheap, cloneable handle onto one node of a registry's
//! tree. Enablement cascades to every descendant; level changes do not, so
//! children only inherit a level when they are created.

use crate::emitter::Record;
use crate::registry::{NodeId, Shared};
use nslog_types::{Level, Namespace};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use tracing::trace;

/// A node in the namespace tree.
///
/// Two handles are equal when they refer to the same logger of the same
/// registry.
///
/// # Example
///
/// ```
/// use nslog_core::Registry;
///
/// let registry = Registry::new();
/// let app = registry.get_logger("app");
/// let db = registry.get_logger("app.db");
///
/// app.enable().set_level("warning");
/// assert!(db.is_enabled());
/// assert!(app.can_log("error"));
/// assert!(!app.can_log("info"));
/// assert!(!app.can_log("bogus"));
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
    id: NodeId,
}

impl Logger {
    pub(crate) fn new(shared: Arc<Shared>, id: NodeId) -> Self {
        Self { shared, id }
    }

    fn sibling(&self, id: NodeId) -> Logger {
        Logger::new(Arc::clone(&self.shared), id)
    }

    /// Fully-qualified namespace.
    pub fn namespace(&self) -> Namespace {
        self.shared.state.read().nodes[self.id].namespace.clone()
    }

    /// Last namespace segment.
    pub fn name(&self) -> String {
        self.shared.state.read().nodes[self.id]
            .namespace
            .name()
            .to_string()
    }

    /// Whether this is the root logger.
    pub fn is_root(&self) -> bool {
        self.shared.state.read().nodes[self.id].parent.is_none()
    }

    /// Whether the logger is enabled.
    pub fn is_enabled(&self) -> bool {
        self.shared.state.read().nodes[self.id].enabled
    }

    /// Current threshold level.
    pub fn level(&self) -> Level {
        self.shared.state.read().nodes[self.id].level
    }

    /// Current threshold level's name.
    pub fn level_name(&self) -> &'static str {
        self.level().name()
    }

    /// The parent logger, `None` for the root.
    pub fn parent(&self) -> Option<Logger> {
        let parent = self.shared.state.read().nodes[self.id].parent;
        parent.map(|id| self.sibling(id))
    }

    /// Direct children in creation order.
    pub fn children(&self) -> Vec<Logger> {
        let ids: Vec<NodeId> = self.shared.state.read().nodes[self.id]
            .children
            .values()
            .copied()
            .collect();
        ids.into_iter().map(|id| self.sibling(id)).collect()
    }

    /// Direct child by its name segment.
    pub fn child(&self, name: &str) -> Option<Logger> {
        let id = self.shared.state.read().nodes[self.id]
            .children
            .get(name)
            .copied();
        id.map(|id| self.sibling(id))
    }

    /// Enable this logger and every current descendant.
    pub fn enable(&self) -> &Self {
        let mut state = self.shared.state.write();
        state.set_enabled(self.id, true);
        trace!(namespace = %state.nodes[self.id].namespace, "enabled subtree");
        self
    }

    /// Disable this logger and every current descendant.
    pub fn disable(&self) -> &Self {
        let mut state = self.shared.state.write();
        state.set_enabled(self.id, false);
        trace!(namespace = %state.nodes[self.id].namespace, "disabled subtree");
        self
    }

    /// Set the threshold by name.
    ///
    /// Unknown names are ignored and the previous level is kept. Existing
    /// children keep their own levels.
    pub fn set_level(&self, name: &str) -> &Self {
        match Level::lookup(name) {
            Some(level) => self.set_level_to(level),
            None => {
                trace!(namespace = %self.namespace(), level = name, "ignored unknown level");
                self
            }
        }
    }

    /// Set the threshold.
    pub fn set_level_to(&self, level: Level) -> &Self {
        self.shared.state.write().nodes[self.id].level = level;
        self
    }

    /// Whether a call at the named level would be emitted.
    ///
    /// Unknown names are never loggable.
    pub fn can_log(&self, level: &str) -> bool {
        Level::lookup(level).map_or(false, |level| self.accepts(Some(level)))
    }

    /// Whether a call at `level` would be emitted.
    pub fn can_log_at(&self, level: Level) -> bool {
        self.accepts(Some(level))
    }

    /// Whether a level-less call would be emitted.
    pub fn can_log_unleveled(&self) -> bool {
        self.accepts(None)
    }

    fn accepts(&self, level: Option<Level>) -> bool {
        self.shared.emitter.is_available() && self.shared.state.read().accepts(self.id, level)
    }

    /// Generic entry point: log at a named level, or level-less with `None`.
    ///
    /// Filtered calls, including unknown level names, are silent no-ops.
    #[track_caller]
    pub fn log_at(&self, level: Option<&str>, args: fmt::Arguments<'_>) -> &Self {
        match level {
            Some(name) => match Level::lookup(name) {
                Some(level) => self.emit(Some(level), args, Location::caller()),
                None => self,
            },
            None => self.emit(None, args, Location::caller()),
        }
    }

    /// Log without a level; only requires the logger to be enabled.
    #[track_caller]
    pub fn log(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(None, args, Location::caller())
    }

    /// Level-less dump of a value, optionally followed by a message:
    /// `<value:?>: <message>`.
    #[track_caller]
    pub fn inspect<T: fmt::Debug + ?Sized>(&self, value: &T, message: Option<&str>) -> &Self {
        match message {
            Some(message) => self.emit(None, format_args!("{:?}: {}", value, message), Location::caller()),
            None => self.emit(None, format_args!("{:?}", value), Location::caller()),
        }
    }

    /// Log at `debug`.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(Some(Level::Debug), args, Location::caller())
    }

    /// Log at `info`.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(Some(Level::Info), args, Location::caller())
    }

    /// Log at `warning`.
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(Some(Level::Warning), args, Location::caller())
    }

    /// Log at `error`.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(Some(Level::Error), args, Location::caller())
    }

    /// Log at `fatal`.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> &Self {
        self.emit(Some(Level::Fatal), args, Location::caller())
    }

    fn emit(
        &self,
        level: Option<Level>,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) -> &Self {
        let emitter = &self.shared.emitter;
        if !emitter.is_available() {
            return self;
        }

        if !self.shared.state.read().accepts(self.id, level) {
            return self;
        }

        // Arguments may reach back into the registry, so no lock is held
        // while they are formatted or while the line is written.
        let message = args.to_string();
        let (namespace, options) = {
            let state = self.shared.state.read();
            (state.nodes[self.id].namespace.clone(), state.options.clone())
        };

        let record = Record {
            level,
            namespace: &namespace,
            message: &message,
            location,
        };
        let line = emitter.render(&options, &record);
        emitter.write(level, &line);
        self
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared) && self.id == other.id
    }
}

impl Eq for Logger {}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.read();
        let node = &state.nodes[self.id];
        f.debug_struct("Logger")
            .field("namespace", &node.namespace.as_str())
            .field("enabled", &node.enabled)
            .field("level", &node.level.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::Registry;
    use nslog_types::Options;

    fn quiet_registry() -> (Registry, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let registry = Registry::builder()
            .sink(sink.clone())
            .without_call_site()
            .options(Options {
                show_timestamp: false,
                ..Options::default()
            })
            .build();
        (registry, sink)
    }

    #[test]
    fn test_non_root_starts_disabled() {
        let (registry, _) = quiet_registry();
        registry.root().disable();
        let app = registry.get_logger("app");
        assert!(!app.is_enabled());
        assert_eq!(app.level(), Level::All);
    }

    #[test]
    fn test_child_inherits_enabled_root() {
        let (registry, _) = quiet_registry();
        // Root is enabled by default, so fresh children inherit that
        let app = registry.get_logger("app");
        assert!(app.is_enabled());
    }

    #[test]
    fn test_set_level_ignores_unknown() {
        let (registry, _) = quiet_registry();
        let app = registry.get_logger("app");
        app.set_level("error");
        app.set_level("bogus");
        assert_eq!(app.level(), Level::Error);
        app.set_level("DEBUG");
        assert_eq!(app.level_name(), "debug");
    }

    #[test]
    fn test_children_in_creation_order() {
        let (registry, _) = quiet_registry();
        registry.get_logger("app.zeta");
        registry.get_logger("app.alpha");
        registry.get_logger("app.mid.deep");

        let app = registry.get_logger("app");
        let names: Vec<String> = app.children().iter().map(Logger::name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(app.child("mid").unwrap().children().len(), 1);
        assert!(app.child("missing").is_none());
    }

    #[test]
    fn test_filtered_calls_write_nothing() {
        let (registry, sink) = quiet_registry();
        let app = registry.get_logger("app");
        app.set_level("warning");

        app.debug(format_args!("hidden"))
            .info(format_args!("hidden"))
            .log_at(Some("nonsense"), format_args!("hidden"))
            .warn(format_args!("shown {}", 1))
            .fatal(format_args!("shown {}", 2));

        assert_eq!(sink.lines(), vec!["app - WARNING - shown 1", "app - FATAL - shown 2"]);
    }

    #[test]
    fn test_unleveled_log_bypasses_threshold() {
        let (registry, sink) = quiet_registry();
        let app = registry.get_logger("app");
        app.set_level("fatal");

        app.log(format_args!("plain"));
        app.log_at(None, format_args!("also plain"));
        assert_eq!(sink.lines(), vec!["app - plain", "app - also plain"]);

        app.disable();
        app.log(format_args!("dropped"));
        assert!(!app.can_log_unleveled());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_logger_equality_is_identity() {
        let (a, _) = quiet_registry();
        let (b, _) = quiet_registry();
        assert_eq!(a.get_logger("x"), a.get_logger("global.x"));
        assert_ne!(a.get_logger("x"), b.get_logger("x"));
        assert_ne!(a.get_logger("x"), a.get_logger("y"));
    }

    #[test]
    fn test_debug_format() {
        let (registry, _) = quiet_registry();
        let app = registry.get_logger("app");
        let rendered = format!("{:?}", app);
        assert!(rendered.contains("global.app"));
        assert!(rendered.contains("enabled: true"));
    }

    #[test]
    fn test_inspect_dumps_value() {
        let (registry, sink) = quiet_registry();
        let app = registry.get_logger("app");

        app.inspect(&vec![1, 2], Some("ids"));
        app.inspect("bare", None);
        assert_eq!(sink.lines(), vec!["app - [1, 2]: ids", "app - \"bare\""]);

        app.disable();
        app.inspect(&3, None);
        assert_eq!(sink.len(), 2);
    }

    /// Formats by touching the registry it is logged through.
    struct Reentrant(Registry);

    impl fmt::Display for Reentrant {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let inner = self.0.get_logger("app.inner");
            inner.set_level("error").enable();
            write!(f, "{}", inner.level_name())
        }
    }

    #[test]
    fn test_arguments_may_use_the_registry() {
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;

        let (registry, sink) = quiet_registry();
        let (done, finished) = mpsc::channel();

        let worker = registry.clone();
        thread::spawn(move || {
            let app = worker.get_logger("app");
            app.info(format_args!("inner {}", Reentrant(worker.clone())));
            let _ = done.send(());
        });

        assert!(
            finished.recv_timeout(Duration::from_secs(5)).is_ok(),
            "log call did not complete"
        );
        assert_eq!(sink.lines(), vec!["app - INFO - inner error"]);
        assert_eq!(registry.logger_count(), 3);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_diagnostics_name_the_namespace() {
        let (registry, _) = quiet_registry();
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let db = registry.get_logger("app.db");
            db.disable();
            db.set_level("shouting");
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert!(output.contains("disabled subtree"), "{}", output);
        assert!(output.contains("namespace=global.app.db"), "{}", output);
        assert!(!output.contains("logger="), "{}", output);
    }
}
