//! CLI parse: clap types for appstate. No behavior; definitions only.

use crate::config::Region;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Appstate CLI - manage key-values in an application's remote state store
#[derive(Parser, Debug)]
#[command(name = "appstate", version)]
#[command(about = "Manage key-values in an application's remote state store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// State region. Defaults to the configured region, or 'amer' if neither is set
    #[arg(long, global = true, value_enum)]
    pub region: Option<Region>,

    /// Format output as json
    #[arg(long, global = true)]
    pub json: bool,

    /// Application root directory (where `.appstate/` config is looked up)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get a key-value
    Get {
        /// State key
        key: String,
    },
    /// Put a key-value
    Put {
        /// State key
        key: String,
        /// State value
        value: String,
        /// Time to live in seconds. Default is 86400 (24 hours)
        #[arg(short = 't', long)]
        ttl: Option<u64>,
    },
    /// Delete key-values
    #[command(visible_alias = "del", alias = "remove", alias = "rm")]
    Delete {
        /// Keys to delete. Above 5 keys, you will be prompted for confirmation
        keys: Vec<String>,
        /// [use with caution!] Delete ALL key-values matching the provided glob-like pattern
        #[arg(long = "match", value_name = "PATTERN")]
        pattern: Option<String>,
        /// [use with caution!] Force delete, no safety prompt
        #[arg(long)]
        force: bool,
    },
    /// List keys, by default all
    #[command(visible_alias = "ls")]
    List {
        /// Glob-like pattern to filter keys
        #[arg(long = "match", value_name = "PATTERN")]
        pattern: Option<String>,
    },
    /// Display stats about the stored key-values
    Stats,
}

impl Commands {
    /// Command name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Get { .. } => "get",
            Commands::Put { .. } => "put",
            Commands::Delete { .. } => "delete",
            Commands::List { .. } => "list",
            Commands::Stats => "stats",
        }
    }
}
