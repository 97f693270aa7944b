//! JSON report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::models::{OutputConfig, StatsResult};
use crate::error::Result;

/// Writes a statistics report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "person1": {"name": "Alice", "messages": 2, ...},
///   "person2": {"name": "Bob", "messages": 1, ...},
///   "monthly": {"2020": {"1": {"Alice": 0, "Bob": 0}, ...}, ...}
/// }
/// ```
pub fn write_json(result: &StatsResult, output_path: &Path, config: &OutputConfig) -> Result<()> {
    let json = to_json(result, config)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Renders a statistics report as a JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json(result: &StatsResult, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
