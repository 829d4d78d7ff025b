//! CLI command definitions
//!
//! Defines the clap commands for the linediff CLI.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two text files line by line
    Diff {
        /// File with the expected text
        expected: PathBuf,

        /// File with the actual text
        actual: PathBuf,

        /// Name shown in the report title (default: the actual file path)
        #[arg(long)]
        name: Option<String>,

        /// Also list equal lines
        #[arg(long)]
        full: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Largest expected*actual line product to align before summarizing (0 = no limit)
        #[arg(long)]
        max_cells: Option<usize>,
    },

    /// Run YAML comparison scenarios
    Check {
        /// Scenario files to run
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Also list equal lines in failure reports
        #[arg(long)]
        full: bool,
    },

    /// Print text with control characters escaped
    Escape {
        /// Text to escape (reads stdin line by line when omitted)
        text: Option<String>,
    },
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON verdict and report
    Json,
}
