//! Collaborator traits injected into the emitter.

use std::panic::Location;
use crate::Level;

/// Destination for rendered log lines.
///
/// Implementers receive the level of the call (`None` for level-less calls)
/// so they can pick a severity-appropriate output, falling back to a generic
/// write otherwise.
pub trait Sink: Send + Sync {
    /// Write one rendered line.
    fn write(&self, level: Option<Level>, line: &str);

    /// Whether the sink can currently accept lines.
    ///
    /// A logger attached to an unavailable sink reports that it cannot log.
    fn is_available(&self) -> bool {
        true
    }
}

/// Strategy describing where a log call was made.
///
/// The emitter works unchanged when no strategy is installed.
pub trait CallSiteStrategy: Send + Sync {
    /// Describe the call site, or `None` to omit the suffix.
    fn describe(&self, location: &'static Location<'static>) -> Option<String>;
}
