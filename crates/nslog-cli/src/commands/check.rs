//! Report whether a logger accepts a level.

use anyhow::Result;
use colored::Colorize;
use nslog_types::LoggingConfig;

pub fn execute(config: &LoggingConfig, namespace: &str, level: &str) -> Result<()> {
    let logger = super::configured(config)?.get_logger(namespace);

    let verdict = if logger.can_log(level) {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };

    println!(
        "{} {} {} (enabled: {}, level: {})",
        logger.namespace().as_str().cyan(),
        level,
        verdict,
        logger.is_enabled(),
        logger.level_name()
    );
    Ok(())
}
