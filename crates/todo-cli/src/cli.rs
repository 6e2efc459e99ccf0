//! Command-line interface definition using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::render::OutputFormat;
use crate::session::{SessionConfig, DEFAULT_STORE_PATH};

/// Interactive to-do list backed by a plain text file
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the todo store file
    #[arg(short, long, env = "TODO_STORE", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Do not load or save line-editor history
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    /// Returns the session configuration for the chosen store.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(&self.store)
    }

    /// Returns the history file path, kept next to the store.
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        let mut path: OsString = self.store.clone().into_os_string();
        path.push(".history");
        Some(PathBuf::from(path))
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
