//! The namespace registry.
//!
//! Every logger lives in one arena owned by the registry. A parent holds the
//! ids of its children; a child refers back to its parent by id only. All
//! tree state and the active options sit behind a single lock, so resolving
//! an ancestor chain or cascading an enable is never observed half-done.

use crate::emitter::{Emitter, LocationCallSite};
use crate::logger::Logger;
use crate::sink::ConsoleSink;
use indexmap::IndexMap;
use nslog_types::{
    CallSiteStrategy, Level, LoggingConfig, Namespace, NamespaceRules, NslogError, Options,
    Result, Sink,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// Index of a logger inside the registry arena.
pub(crate) type NodeId = usize;

/// The root logger is always the first node.
pub(crate) const ROOT: NodeId = 0;

/// A single logger's state.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) namespace: Namespace,
    pub(crate) enabled: bool,
    pub(crate) level: Level,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: IndexMap<String, NodeId>,
}

/// Everything guarded by the registry lock.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) options: Options,
    pub(crate) rules: NamespaceRules,
    pub(crate) nodes: Vec<Node>,
    index: IndexMap<String, NodeId>,
}

impl State {
    fn new(options: Options, rules: NamespaceRules) -> Self {
        let root = Namespace::root(&rules);
        let mut index = IndexMap::new();
        index.insert(root.as_str().to_string(), ROOT);

        Self {
            options,
            rules,
            nodes: vec![Node {
                namespace: root,
                enabled: true,
                level: Level::All,
                parent: None,
                children: IndexMap::new(),
            }],
            index,
        }
    }

    pub(crate) fn normalize(&self, raw: &str) -> Namespace {
        Namespace::parse(raw, &self.rules)
    }

    pub(crate) fn find(&self, namespace: &Namespace) -> Option<NodeId> {
        self.index.get(namespace.as_str()).copied()
    }

    /// Return the node for `namespace`, creating any missing ancestors
    /// top-down first.
    pub(crate) fn resolve(&mut self, namespace: &Namespace) -> NodeId {
        if let Some(id) = self.find(namespace) {
            return id;
        }

        let parent_ns = match namespace.parent() {
            Some(parent) => parent,
            // Only the root has no parent, and it always exists.
            None => return ROOT,
        };
        let parent = self.resolve(&parent_ns);

        let id = self.nodes.len();
        let (enabled, level) = {
            let p = &self.nodes[parent];
            (p.enabled, p.level)
        };

        self.nodes.push(Node {
            namespace: namespace.clone(),
            enabled,
            level,
            parent: Some(parent),
            children: IndexMap::new(),
        });
        self.nodes[parent]
            .children
            .insert(namespace.name().to_string(), id);
        self.index.insert(namespace.as_str().to_string(), id);

        debug!(
            namespace = %namespace,
            enabled,
            level = level.name(),
            "created logger"
        );
        id
    }

    /// Set `enabled` on a node and every current descendant.
    pub(crate) fn set_enabled(&mut self, id: NodeId, enabled: bool) {
        self.nodes[id].enabled = enabled;
        let children: Vec<NodeId> = self.nodes[id].children.values().copied().collect();
        for child in children {
            self.set_enabled(child, enabled);
        }
    }

    /// `enabled` of a node and all its descendants, depth first.
    #[cfg(test)]
    fn subtree_enabled(&self, id: NodeId) -> Vec<bool> {
        let node = &self.nodes[id];
        let mut flags = vec![node.enabled];
        for &child in node.children.values() {
            flags.extend(self.subtree_enabled(child));
        }
        flags
    }

    /// Whether a node accepts a call at `level` (`None` for level-less calls).
    pub(crate) fn accepts(&self, id: NodeId, level: Option<Level>) -> bool {
        let node = &self.nodes[id];
        node.enabled && level.map_or(true, |level| level.passes(node.level))
    }

    fn reconfigure(&mut self, options: Options) -> Result<()> {
        let rules = options.rules()?;
        if rules != self.rules {
            if self.nodes.len() > 1 {
                return Err(NslogError::Config(format!(
                    "cannot change namespace rules to delimiter {:?} / root '{}' after {} loggers were created",
                    rules.delimiter(),
                    rules.root(),
                    self.nodes.len() - 1
                )));
            }
            let root = Namespace::root(&rules);
            self.index.clear();
            self.index.insert(root.as_str().to_string(), ROOT);
            self.nodes[ROOT].namespace = root;
            self.rules = rules;
        }
        self.options = options;
        Ok(())
    }
}

/// State shared between a registry and every logger it hands out.
pub(crate) struct Shared {
    pub(crate) state: RwLock<State>,
    pub(crate) emitter: Emitter,
}

/// Process-lifetime mapping from namespace to logger.
///
/// Guarantees exactly one logger per fully-qualified namespace. Cloning a
/// registry yields another handle onto the same tree.
///
/// # Example
///
/// ```
/// use nslog_core::Registry;
///
/// let registry = Registry::new();
/// let button = registry.get_logger("app.ui.button");
///
/// assert_eq!(button.namespace().as_str(), "global.app.ui.button");
/// assert_eq!(registry.get_logger("app.ui.button"), button);
/// assert_eq!(registry.namespaces(), vec![
///     "global", "global.app", "global.app.ui", "global.app.ui.button",
/// ]);
/// ```
#[derive(Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

impl Registry {
    /// Registry writing to the console with default options.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a registry with custom collaborators.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Replace the active options.
    ///
    /// # Errors
    ///
    /// Fails, leaving the previous options in place, when the namespace rules
    /// are invalid or would change after non-root loggers exist.
    pub fn configure(&self, options: Options) -> Result<()> {
        self.shared.state.write().reconfigure(options)
    }

    /// Snapshot of the active options.
    pub fn options(&self) -> Options {
        self.shared.state.read().options.clone()
    }

    /// Get the logger for `namespace`, creating it and any missing ancestors.
    pub fn get_logger(&self, namespace: &str) -> Logger {
        {
            let state = self.shared.state.read();
            let ns = state.normalize(namespace);
            if let Some(id) = state.find(&ns) {
                return self.handle(id);
            }
        }

        let mut state = self.shared.state.write();
        let ns = state.normalize(namespace);
        let id = state.resolve(&ns);
        trace!(requested = namespace, resolved = %ns, "resolved logger");
        self.handle(id)
    }

    /// Alias of [`Registry::get_logger`].
    pub fn resolve(&self, namespace: &str) -> Logger {
        self.get_logger(namespace)
    }

    /// The root logger.
    pub fn root(&self) -> Logger {
        self.handle(ROOT)
    }

    /// Look up an existing logger without creating anything.
    pub fn lookup(&self, namespace: &str) -> Option<Logger> {
        let state = self.shared.state.read();
        let ns = state.normalize(namespace);
        state.find(&ns).map(|id| self.handle(id))
    }

    /// Number of loggers, the root included.
    pub fn logger_count(&self) -> usize {
        self.shared.state.read().nodes.len()
    }

    /// Fully-qualified namespaces in creation order.
    pub fn namespaces(&self) -> Vec<String> {
        self.shared.state.read().index.keys().cloned().collect()
    }

    /// Apply a complete configuration.
    ///
    /// Options are configured first; then each listed logger is resolved and
    /// has `enabled` (cascading) and then `level` applied, in declaration
    /// order.
    pub fn apply(&self, config: &LoggingConfig) -> Result<()> {
        self.configure(config.options.clone())?;

        for (namespace, settings) in &config.loggers {
            let logger = self.get_logger(namespace);
            match settings.enabled {
                Some(true) => {
                    logger.enable();
                }
                Some(false) => {
                    logger.disable();
                }
                None => {}
            }
            if let Some(level) = settings.level {
                logger.set_level_to(level);
            }
        }

        debug!(loggers = config.loggers.len(), "applied logging configuration");
        Ok(())
    }

    fn handle(&self, id: NodeId) -> Logger {
        Logger::new(Arc::clone(&self.shared), id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.logger_count())
            .finish()
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    options: Options,
    sink: Option<Arc<dyn Sink>>,
    call_site: Option<Box<dyn CallSiteStrategy>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            options: Options::default(),
            sink: Some(Arc::new(ConsoleSink::new())),
            call_site: Some(Box::new(LocationCallSite)),
        }
    }
}

impl RegistryBuilder {
    /// Initial options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Destination for rendered lines.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build without any sink; every logger then reports it cannot log.
    pub fn without_sink(mut self) -> Self {
        self.sink = None;
        self
    }

    /// Strategy producing the call-site suffix.
    pub fn call_site(mut self, strategy: Box<dyn CallSiteStrategy>) -> Self {
        self.call_site = Some(strategy);
        self
    }

    /// Build without call-site detection.
    pub fn without_call_site(mut self) -> Self {
        self.call_site = None;
        self
    }

    /// Build the registry.
    ///
    /// Invalid namespace rules in the initial options fall back to the
    /// defaults, since building never fails.
    pub fn build(self) -> Registry {
        let (options, rules) = match self.options.rules() {
            Ok(rules) => (self.options, rules),
            Err(e) => {
                tracing::warn!("{}; using default namespace rules", e);
                let options = Options {
                    delimiter: Options::default().delimiter,
                    root: Options::default().root,
                    ..self.options
                };
                (options, NamespaceRules::default())
            }
        };

        Registry {
            shared: Arc::new(Shared {
                state: RwLock::new(State::new(options, rules)),
                emitter: Emitter::new(self.sink, self.call_site),
            }),
        }
    }
}
