//! Coloured level labels.

use colored::*;
use nslog_types::Level;

/// The level label painted with its conventional colour.
pub fn paint_level(level: Level) -> String {
    let label = level.label();
    match level {
        Level::All => label.white().to_string(),
        Level::Debug => label.blue().to_string(),
        Level::Info => label.green().to_string(),
        Level::Warning => label.yellow().to_string(),
        Level::Error => label.red().to_string(),
        Level::Fatal => label.red().bold().to_string(),
    }
}
