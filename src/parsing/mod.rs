//! Line-level parsing utilities.
//!
//! These helpers classify individual export lines. They are shared by the
//! message parser and are public so callers can inspect single lines.

pub mod whatsapp;

pub use whatsapp::{
    DatedLine, LineKind, Lines, build_date, classify_line, normalize_line, parse_year, split_lines,
};
