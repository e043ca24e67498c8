//! Print the logger tree.

use anyhow::Result;
use colored::Colorize;
use nslog_core::Logger;
use nslog_types::LoggingConfig;

pub fn execute(config: &LoggingConfig) -> Result<()> {
    let registry = super::configured(config)?;
    print_node(&registry.root(), 0);
    Ok(())
}

fn print_node(logger: &Logger, depth: usize) {
    let state = if logger.is_enabled() {
        "enabled".green()
    } else {
        "disabled".red()
    };

    println!(
        "{}{} [{}, {}]",
        "  ".repeat(depth),
        logger.name().cyan().bold(),
        state,
        logger.level_name()
    );

    for child in logger.children() {
        print_node(&child, depth + 1);
    }
}
