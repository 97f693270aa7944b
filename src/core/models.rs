//! Result and configuration types for chat statistics.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Years covered by the monthly matrix.
pub const TRACKED_YEARS: RangeInclusive<i32> = 2020..=2027;

/// Months of a year, 1-based.
pub const MONTHS: RangeInclusive<u32> = 1..=12;

/// Statistics for one of the two tracked participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    /// Participant name (or the placeholder for an empty slot)
    pub name: String,
    /// Text messages counted (media and deleted messages excluded)
    pub messages: u64,
    /// Total trimmed length of those messages, in characters
    pub characters: u64,
    /// `characters / messages`, two decimals
    pub average_length: f64,
    /// Messages containing an apology word
    pub sorry_count: u64,
    /// Omitted-media placeholders sent
    pub media_count: u64,
    /// Messages containing at least one link
    pub link_count: u64,
    /// Heuristic emoji count
    pub emoji_count: u64,
    /// Share of the current year's days with at least one message, one decimal
    pub active_days_percentage: f64,
    /// Mean month-over-month change in the current year (percent), one decimal
    pub monthly_growth: f64,
}

impl PersonStats {
    /// Creates an all-zero block for `name`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: 0,
            characters: 0,
            average_length: 0.0,
            sorry_count: 0,
            media_count: 0,
            link_count: 0,
            emoji_count: 0,
            active_days_percentage: 0.0,
            monthly_growth: 0.0,
        }
    }
}

/// Message counts by year, month and sender.
///
/// Every year in [`TRACKED_YEARS`] and every month is present for each
/// tracked sender, starting at zero. Serializes as nested JSON objects keyed
/// by `"year"`, `"month"` and sender name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyMatrix(BTreeMap<i32, BTreeMap<u32, BTreeMap<String, u64>>>);

impl MonthlyMatrix {
    /// Creates a zero-filled matrix for the given senders.
    pub fn new<S: AsRef<str>>(senders: &[S]) -> Self {
        let row: BTreeMap<String, u64> = senders
            .iter()
            .map(|s| (s.as_ref().to_string(), 0))
            .collect();

        let matrix = TRACKED_YEARS
            .map(|year| (year, MONTHS.map(|month| (month, row.clone())).collect()))
            .collect();

        Self(matrix)
    }

    /// Increments a cell. Returns `false` (and changes nothing) if the year,
    /// month or sender is not tracked.
    pub fn increment(&mut self, year: i32, month: u32, sender: &str) -> bool {
        match self
            .0
            .get_mut(&year)
            .and_then(|months| months.get_mut(&month))
            .and_then(|row| row.get_mut(sender))
        {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Returns a single cell.
    pub fn get(&self, year: i32, month: u32, sender: &str) -> Option<u64> {
        self.0.get(&year)?.get(&month)?.get(sender).copied()
    }

    /// Returns the twelve monthly counts of `sender` in `year`.
    pub fn months_of(&self, year: i32, sender: &str) -> Option<[u64; 12]> {
        let months = self.0.get(&year)?;
        let mut counts = [0u64; 12];
        for (slot, month) in counts.iter_mut().zip(MONTHS) {
            *slot = *months.get(&month)?.get(sender)?;
        }
        Some(counts)
    }

    /// Iterates over the tracked years.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.keys().copied()
    }

    /// Returns the underlying nested map.
    pub fn as_map(&self) -> &BTreeMap<i32, BTreeMap<u32, BTreeMap<String, u64>>> {
        &self.0
    }
}

/// Comparative statistics for the two most active participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// Most active participant
    pub person1: PersonStats,
    /// Second most active participant
    pub person2: PersonStats,
    /// Monthly message counts for both participants
    pub monthly: MonthlyMatrix,
}

/// Configuration for rendering a [`StatsResult`].
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Indent the JSON output
    pub pretty: bool,
}

impl OutputConfig {
    /// Creates a configuration for compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables indented output.
    pub fn with_pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}
