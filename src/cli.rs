//! Command-line interface definition using clap.
//!
//! The binary is a thin shell: it validates the input path, reads the export,
//! runs the statistics pipeline and prints the JSON report.

use std::path::Path;

use clap::Parser;

use crate::config::StatsConfig;
use crate::core::models::OutputConfig;
use crate::error::{ChatstatsError, Result};

/// Compare the two most active participants of a WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --pretty -o report.json
    chatstats chat.txt --today 2025-06-30
    RUST_LOG=debug chatstats chat.txt")]
pub struct Args {
    /// Path to the exported chat (TXT)
    pub input: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Indent the JSON report
    #[arg(short, long)]
    pub pretty: bool,

    /// Treat this day as today (YYYY-MM-DD) for active days and growth
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Name used when fewer than two participants are found
    #[arg(long, value_name = "NAME", default_value = "Unknown")]
    pub placeholder: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the input path, rejecting a missing or empty one.
    pub fn input_path(&self) -> Result<&Path> {
        match self.input.as_deref() {
            None => Err(ChatstatsError::MissingInput),
            Some(name) if name.trim().is_empty() => Err(ChatstatsError::EmptyFilename),
            Some(name) => Ok(Path::new(name)),
        }
    }

    /// Builds the pipeline configuration from the flags.
    pub fn stats_config(&self) -> Result<StatsConfig> {
        let config = StatsConfig::new().with_placeholder_name(self.placeholder.clone());
        match self.today.as_deref() {
            Some(today) => config.with_reference_date_str(today),
            None => Ok(config),
        }
    }

    /// Builds the report rendering configuration.
    pub fn output_config(&self) -> OutputConfig {
        let config = OutputConfig::new();
        if self.pretty { config.with_pretty() } else { config }
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
