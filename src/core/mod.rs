//! Statistics aggregation.
//!
//! This module contains:
//! - [`classify`] - Media, deleted, edited, apology and link detection
//! - [`emoji`] - Heuristic emoji counting
//! - [`ranking`] - Selection of the two tracked participants
//! - [`analyzer`] - The aggregation pass and derived metrics
//! - [`models`] - Result types and output configuration
//! - [`output`] - JSON report writers

pub mod analyzer;
pub mod classify;
pub mod emoji;
pub mod models;
pub mod output;
pub mod ranking;

// Re-export main types for convenience
pub use analyzer::Analyzer;
pub use models::{MonthlyMatrix, OutputConfig, PersonStats, StatsResult};
pub use output::{to_json, write_json};
pub use ranking::rank_top_two;
