//! Configuration for the statistics pipeline.
//!
//! ```rust
//! use chatstats::config::StatsConfig;
//! use chrono::NaiveDate;
//!
//! let config = StatsConfig::new()
//!     .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
//!     .with_placeholder_name("Nobody");
//! assert_eq!(config.today().to_string(), "2024-06-30");
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::ranking::PLACEHOLDER_NAME;
use crate::error::{ChatstatsError, Result};

/// Configuration for [`Analyzer`](crate::core::analyzer::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Day treated as "today" for active-day and growth metrics.
    ///
    /// `None` (the default) uses the local calendar date at analysis time.
    pub reference_date: Option<NaiveDate>,

    /// Name given to an empty participant slot (default: `Unknown`)
    pub placeholder_name: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            placeholder_name: PLACEHOLDER_NAME.to_string(),
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins "today" to a fixed date.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Pins "today" from a `YYYY-MM-DD` string.
    pub fn with_reference_date_str(self, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ChatstatsError::invalid_date(date))?;
        Ok(self.with_reference_date(parsed))
    }

    /// Sets the name used for an empty participant slot.
    #[must_use]
    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    /// Returns the effective "today".
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
