//! Logger namespaces.
//!
//! A namespace is a sequence of segments joined by a delimiter and always
//! beginning with the reserved root segment, e.g. `global.app.ui`.

use std::fmt;
use crate::errors::Result;

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// Default name of the root segment.
pub const DEFAULT_ROOT: &str = "global";

/// Delimiter and root segment used to normalize namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceRules {
    delimiter: char,
    root: String,
}

impl NamespaceRules {
    /// Create validated namespace rules.
    ///
    /// # Errors
    ///
    /// The delimiter must not be whitespace, and the root segment must be
    /// non-empty and must not contain the delimiter.
    pub fn new(delimiter: char, root: impl Into<String>) -> Result<Self> {
        let root = root.into();
        if delimiter.is_whitespace() {
            crate::bail!(Config, "Invalid namespace delimiter {:?}: must not be whitespace", delimiter);
        }
        if root.trim().is_empty() || root.contains(delimiter) {
            crate::bail!(
                Config,
                "Invalid root segment '{}': must be non-empty and must not contain '{}'",
                root,
                delimiter
            );
        }
        Ok(Self { delimiter, root })
    }

    /// Segment delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Root segment name.
    pub fn root(&self) -> &str {
        &self.root
    }
}

impl Default for NamespaceRules {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            root: DEFAULT_ROOT.to_string(),
        }
    }
}

/// A normalized, fully-qualified logger namespace.
///
/// # Example
///
/// ```
/// use nslog_types::{Namespace, NamespaceRules};
///
/// let rules = NamespaceRules::default();
/// let ns = Namespace::parse("app.ui", &rules);
/// assert_eq!(ns.as_str(), "global.app.ui");
/// assert_eq!(ns.display_path(), "app.ui");
/// assert_eq!(ns.parent().unwrap().as_str(), "global.app");
///
/// // Empty input and malformed segments collapse to the root
/// assert!(Namespace::parse("", &rules).is_root());
/// assert!(Namespace::parse("app..ui", &rules).is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    full: String,
    delimiter: char,
    root_len: usize,
}

impl Namespace {
    /// The root namespace under the given rules.
    pub fn root(rules: &NamespaceRules) -> Self {
        Self {
            full: rules.root.clone(),
            delimiter: rules.delimiter,
            root_len: rules.root.len(),
        }
    }

    /// Normalize raw input into a namespace.
    ///
    /// Never fails: empty input, the bare root keyword, and input with any
    /// empty segment all map to the root namespace. The root segment is
    /// prepended unless the first segment already is the root.
    pub fn parse(raw: &str, rules: &NamespaceRules) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == rules.root {
            return Self::root(rules);
        }

        if raw.split(rules.delimiter).any(|segment| segment.trim().is_empty()) {
            return Self::root(rules);
        }

        let mut full = String::with_capacity(rules.root.len() + raw.len() + 1);
        if raw.split(rules.delimiter).next() != Some(rules.root.as_str()) {
            full.push_str(&rules.root);
            full.push(rules.delimiter);
        }
        full.push_str(raw);

        Self {
            full,
            delimiter: rules.delimiter,
            root_len: rules.root.len(),
        }
    }

    /// The fully-qualified namespace string.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The last segment.
    pub fn name(&self) -> &str {
        self.full.rsplit(self.delimiter).next().unwrap_or(&self.full)
    }

    /// All segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.full.split(self.delimiter)
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments().count() - 1
    }

    /// Whether this is the root namespace.
    pub fn is_root(&self) -> bool {
        self.full.len() == self.root_len
    }

    /// The immediate parent namespace, `None` for the root.
    pub fn parent(&self) -> Option<Namespace> {
        if self.is_root() {
            return None;
        }
        self.full
            .rsplit_once(self.delimiter)
            .map(|(parent, _)| Self {
                full: parent.to_string(),
                delimiter: self.delimiter,
                root_len: self.root_len,
            })
    }

    /// Every namespace from the root down to and including this one.
    ///
    /// For example, `global.a.b` yields `global`, `global.a`, `global.a.b`.
    pub fn ancestors(&self) -> Vec<Namespace> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(ns) = current {
            current = ns.parent();
            chain.push(ns);
        }
        chain.reverse();
        chain
    }

    /// The namespace without its root segment; empty for the root.
    pub fn display_path(&self) -> &str {
        if self.is_root() {
            ""
        } else {
            &self.full[self.root_len + self.delimiter.len_utf8()..]
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
