//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the statistics report as JSON
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::analyzer::Analyzer;
//! use chatstats::core::models::OutputConfig;
//! use chatstats::core::output::{to_json, write_json};
//!
//! let result = Analyzer::new().analyze(&[]);
//! let config = OutputConfig::new().with_pretty();
//!
//! write_json(&result, "report.json".as_ref(), &config)?;
//! let json = to_json(&result, &config)?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_json};
