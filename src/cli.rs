//! CLI argument parsing for promptscore
//!
//! Uses clap for argument parsing. Supports global flags: --format,
//! --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use promptscore::format::OutputFormat;

/// Promptscore - judge-response parsing and score normalization
#[derive(Parser, Debug)]
#[command(name = "promptscore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a raw judge completion into a structured evaluation
    Parse {
        /// File containing the raw model response (stdin if omitted)
        file: Option<PathBuf>,

        /// Also report scores on the normalized 0-100 scale
        #[arg(long)]
        normalize: bool,
    },

    /// Map a raw score onto the canonical 0-100 percentage scale
    Normalize {
        /// Score in any supported convention (fraction, 1-10 rubric, percentage)
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },
}
