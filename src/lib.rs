//! # Chatstats
//!
//! Engagement statistics for WhatsApp chat exports.
//!
//! ## Overview
//!
//! Chatstats turns the TXT file produced by WhatsApp's "Export chat" into a
//! side-by-side comparison of the two most active participants:
//! - message and character counts, average message length
//! - apology words, shared links, omitted media and emoji
//! - share of active days and month-over-month growth this year
//! - a monthly message matrix for 2020–2027
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let export = "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi Alice";
//! let stats = analyze_str(export, &StatsConfig::new());
//!
//! assert_eq!(stats.person1.messages, 1);
//! assert_eq!(stats.monthly.get(2024, 1, "Alice"), Some(1));
//!
//! let json = to_json(&stats, &OutputConfig::new())?;
//! assert!(json.contains("\"person2\""));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`WhatsAppParser`](parser::WhatsAppParser) and the [`Parser`](parser::Parser) trait
//! - [`parsing`] — single-line classification helpers
//! - [`core`] — aggregation ([`Analyzer`](core::Analyzer)), result models and JSON output
//! - [`config`] — [`StatsConfig`](config::StatsConfig)
//! - [`error`] — [`ChatstatsError`], [`Result`]
//! - [`cli`] — CLI arguments (with the `cli` feature)
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;

use std::path::Path;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::Message;

use crate::config::StatsConfig;
use crate::core::{Analyzer, StatsResult};
use crate::parser::{Parser, WhatsAppParser};

/// Parses export text and computes statistics in one call.
pub fn analyze_str(content: &str, config: &StatsConfig) -> StatsResult {
    let messages = WhatsAppParser::new().parse_str(content);
    Analyzer::with_config(config.clone()).analyze(&messages)
}

/// Decodes export bytes (dropping invalid UTF-8) and computes statistics.
pub fn analyze_bytes(bytes: &[u8], config: &StatsConfig) -> StatsResult {
    let messages = WhatsAppParser::new().parse_bytes(bytes);
    Analyzer::with_config(config.clone()).analyze(&messages)
}

/// Reads an export file and computes statistics.
pub fn analyze_file(path: &Path, config: &StatsConfig) -> Result<StatsResult> {
    let messages = WhatsAppParser::new().parse(path)?;
    Ok(Analyzer::with_config(config.clone()).analyze(&messages))
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::{analyze_bytes, analyze_file, analyze_str};

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::StatsConfig;
    pub use crate::parser::{Parser, WhatsAppParser};

    pub use crate::core::models::{MonthlyMatrix, OutputConfig, PersonStats, StatsResult};
    pub use crate::core::output::{to_json, write_json};
    pub use crate::core::{Analyzer, rank_top_two};
}
