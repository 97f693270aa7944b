//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::core::{Analyzer, to_json, write_json};
use chatstats::parser::{Parser, WhatsAppParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let start = Instant::now();
    let input = args.input_path()?;
    let config = args.stats_config()?;

    info!(input = %input.display(), "reading export");
    let bytes = std::fs::read(input)?;

    let parser = WhatsAppParser::new();
    let messages = parser.parse_bytes(&bytes);
    info!(
        parser = parser.name(),
        messages = messages.len(),
        "parsed export"
    );

    let result = Analyzer::with_config(config).analyze(&messages);
    let output_config = args.output_config();

    match args.output.as_deref() {
        Some(path) => {
            write_json(&result, Path::new(path), &output_config)?;
            info!(output = path, "report written");
        }
        None => println!("{}", to_json(&result, &output_config)?),
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        person1 = %result.person1.name,
        person2 = %result.person2.name,
        "done"
    );
    Ok(())
}
