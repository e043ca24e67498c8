//! Print the level table.

use anyhow::Result;
use colored::Colorize;
use nslog_types::Level;

pub fn execute() -> Result<()> {
    println!("{}", "Levels".cyan().bold());
    for level in Level::ALL_LEVELS {
        println!("  {:<8} {:>3}", level.name(), level.severity());
    }
    Ok(())
}
