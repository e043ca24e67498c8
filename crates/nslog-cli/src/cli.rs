//! CLI structure and command definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nslog_core::ConfigLoader;
use nslog_types::LoggingConfig;

#[derive(Parser)]
#[command(name = "nslog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and exercise hierarchical namespace loggers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show nslog's own diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit one message through a logger
    Emit {
        /// Logger namespace, e.g. app.ui.button
        namespace: String,

        /// Level name, or `log` for a level-less message
        level: String,

        /// Message words
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Print the configured logger tree
    Tree,

    /// Report whether a logger would accept a level
    Check {
        /// Logger namespace
        namespace: String,

        /// Level name
        level: String,
    },

    /// Print the level table
    Levels,

    /// Show version information
    Version {
        /// Show detailed version info
        #[arg(long)]
        detailed: bool,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Emit { namespace, level, message } => {
                emit::execute(&self.load_config()?, namespace, level, &message.join(" "))
            }
            Commands::Tree => {
                tree::execute(&self.load_config()?)
            }
            Commands::Check { namespace, level } => {
                check::execute(&self.load_config()?, namespace, level)
            }
            Commands::Levels => {
                levels::execute()
            }
            Commands::Version { detailed } => {
                version::execute(*detailed)
            }
        }
    }

    /// Merge defaults, the configuration file and `NSLOG_*` variables.
    fn load_config(&self) -> Result<LoggingConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ConfigLoader::load_default().context("Failed to load default configuration")?,
        };

        loader
            .with_environment()
            .build()
            .context("Invalid logging configuration")
    }
}
