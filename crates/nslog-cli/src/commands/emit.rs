//! Emit a single message.

use anyhow::{bail, Result};
use colored::Colorize;
use nslog_types::{Level, LoggingConfig};

pub fn execute(config: &LoggingConfig, namespace: &str, level: &str, message: &str) -> Result<()> {
    let logger = super::configured(config)?.get_logger(namespace);

    if level.eq_ignore_ascii_case("log") {
        if logger.can_log_unleveled() {
            logger.log(format_args!("{}", message));
        } else {
            skipped(logger.namespace().as_str(), "level-less messages");
        }
        return Ok(());
    }

    let Some(parsed) = Level::lookup(level) else {
        bail!("Unknown level '{}'", level);
    };

    if logger.can_log_at(parsed) {
        logger.log_at(Some(parsed.name()), format_args!("{}", message));
    } else {
        skipped(logger.namespace().as_str(), parsed.name());
    }
    Ok(())
}

fn skipped(namespace: &str, what: &str) {
    eprintln!(
        "{} {} does not accept {}",
        "Skipped:".yellow().bold(),
        namespace.cyan(),
        what
    );
}
