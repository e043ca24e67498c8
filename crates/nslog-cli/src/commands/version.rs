//! Show version information.

use anyhow::Result;
use colored::Colorize;

pub fn execute(detailed: bool) -> Result<()> {
    println!("{} {}", "nslog".cyan().bold(), env!("CARGO_PKG_VERSION"));

    if detailed {
        println!("\nBuild Information:");
        println!("  Library: {}", nslog_core::VERSION);
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    Ok(())
}
