//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for picklist using the `clap` crate.
//! It provides command parsing and helpers that turn flags into library
//! types (selection mode, filter rules, output format).
//!
//! # Commands
//!
//! - **pick**: Open the interactive picker and print the committed value(s) (default)
//! - **filter**: Print the rows the picker would show for a query
//! - **config**: Read and write configuration settings
//!
//! # Examples
//!
//! ```
//! use picklist::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["picklist", "filter", "brands.txt", "--query", "pet"]);
//! assert!(matches!(cli.get_command(), Commands::Filter { .. }));
//! ```

use crate::config::{OutputFormat, PicklistConfig};
use crate::filter::FilterRules;
use crate::selection::SelectionMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Where options come from and how results are printed
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// File with one option per line or a JSON string array (stdin if omitted or '-')
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Allow picking several values
    #[arg(short = 'm', long = "multi")]
    pub multi: bool,

    /// Print results as JSON (overrides config)
    #[arg(long = "json")]
    pub json: bool,

    /// Do not hide options starting with the reserved prefix
    #[arg(long = "keep-reserved")]
    pub keep_reserved: bool,
}

impl SourceArgs {
    /// Selection mode requested on the command line
    #[must_use]
    pub const fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multi(self.multi)
    }

    /// Output format, `--json` taking precedence over the config
    #[must_use]
    pub const fn output_format(&self, config: &PicklistConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output_format
        }
    }

    /// Filter rules, `--keep-reserved` taking precedence over the config
    #[must_use]
    pub fn filter_rules(&self, config: &PicklistConfig) -> FilterRules {
        if self.keep_reserved {
            FilterRules::permissive()
        } else {
            config.filter_rules()
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "picklist")]
#[command(about = "Pick values from a filterable list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive picker (default)
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        source: SourceArgs,

        /// Title shown at the top of the modal
        #[arg(long = "header", value_name = "TEXT", default_value = "Select")]
        header: String,

        /// Currently committed value(s); repeat for multi-select
        #[arg(short = 's', long = "selected", value_name = "VALUE")]
        selected: Vec<String>,

        /// Initial query text
        #[arg(long = "query", value_name = "TEXT", default_value = "")]
        query: String,
    },

    /// Print the rows shown for a query without opening the picker
    #[command(visible_alias = "f")]
    Filter {
        #[command(flatten)]
        source: SourceArgs,

        /// Query text
        #[arg(long = "query", value_name = "TEXT", default_value = "")]
        query: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Setting in key=value format (e.g., `max_query_len=30`)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key to retrieve
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Print the configuration file location
    Path,
}

impl ConfigCommands {
    /// Split a `key=value` setting
    ///
    /// Returns `None` when there is no `=`.
    #[must_use]
    pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
        setting
            .split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
    }
}

impl Commands {
    /// Helper method to get the source arguments of pick/filter
    #[must_use]
    pub const fn get_source(&self) -> Option<&SourceArgs> {
        match self {
            Self::Pick { source, .. } | Self::Filter { source, .. } => Some(source),
            Self::Config { .. } => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick from stdin if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick {
            source: SourceArgs::default(),
            header: "Select".to_string(),
            selected: Vec::new(),
            query: String::new(),
        })
    }
}
