pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::PageVariant;

#[derive(Parser)]
#[command(name = "purrfect")]
#[command(about = "Purrfect Cat World, in your terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/purrfect/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (default: stderr, or a cache file for `tui`)
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the cat page
    Tui {
        /// Page version to show: classic, gallery or live (default: from config)
        #[arg(short, long)]
        variant: Option<PageVariant>,
    },
    /// Fetch and print one cat fact
    Fact,
    /// Fetch and print the URL of one cat picture
    Image,
    /// Print the cat characteristics, or the popular breeds
    List {
        /// Show breeds instead of characteristics
        #[arg(long)]
        breeds: bool,
    },
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl Cli {
    /// The page owns the terminal, so `tui` never logs to stderr.
    pub fn log_target(&self) -> LogTarget {
        if let Some(path) = &self.log {
            return LogTarget::File(path.clone());
        }
        match self.command {
            Commands::Tui { .. } => match default_log_path() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Discard,
            },
            _ => LogTarget::Stderr,
        }
    }
}

/// `~/.cache/purrfect/purrfect.log` on Linux.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("purrfect").join("purrfect.log"))
}
