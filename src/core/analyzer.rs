//! Statistics aggregation over parsed messages.
//!
//! [`Analyzer::analyze`] is infallible: empty inputs, single-sender chats and
//! empty denominators all produce zero-valued statistics.
//!
//! # Pipeline
//!
//! 1. Classify each message as omitted media, deleted, or kept (edit markers
//!    stripped).
//! 2. Rank senders of kept messages and track the top two.
//! 3. Accumulate per-sender counters in one pass over kept messages.
//! 4. Derive averages, active-day share and monthly growth.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::StatsConfig;
//! use chatstats::core::analyzer::Analyzer;
//! use chatstats::parser::{Parser, WhatsAppParser};
//!
//! let messages = WhatsAppParser::new()
//!     .parse_str("1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi Alice");
//! let stats = Analyzer::new().analyze(&messages);
//!
//! assert_eq!(stats.person1.name, "Alice");
//! assert_eq!(stats.monthly.get(2024, 1, "Bob"), Some(1));
//! ```

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::classify::{MessageClass, classify, contains_apology, contains_link};
use super::emoji::count_emoji;
use super::models::{MonthlyMatrix, PersonStats, StatsResult};
use super::ranking::rank_top_two;
use crate::Message;
use crate::config::StatsConfig;

/// Upper bound on the number of days in a year.
const MAX_DAYS_IN_YEAR: u32 = 366;

/// Running counters for one tracked participant.
#[derive(Debug, Clone, Default)]
pub struct PersonAccumulator {
    pub messages: u64,
    pub characters: u64,
    pub sorry_count: u64,
    pub media_count: u64,
    pub link_count: u64,
    pub emoji_count: u64,
    /// Distinct days with a message in the reference year
    pub active_days: HashSet<NaiveDate>,
}

impl PersonAccumulator {
    /// Records one kept message.
    pub fn record(&mut self, text: &str, date: NaiveDate, reference_year: i32) {
        self.messages += 1;
        self.characters += text.trim().chars().count() as u64;

        if date.year() == reference_year {
            self.active_days.insert(date);
        }
        if contains_apology(text) {
            self.sorry_count += 1;
        }
        if contains_link(text) {
            self.link_count += 1;
        }
        self.emoji_count += count_emoji(text);
    }

    /// Records one omitted-media placeholder.
    pub fn record_media(&mut self) {
        self.media_count += 1;
    }
}

/// Computes [`StatsResult`]s from parsed messages.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: StatsConfig,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Aggregates statistics for the two most active senders.
    pub fn analyze(&self, messages: &[Message]) -> StatsResult {
        let today = self.config.today();
        let reference_year = today.year();

        let mut media: Vec<&Message> = Vec::new();
        let mut kept: Vec<Message> = Vec::new();
        let mut deleted = 0usize;

        for msg in messages {
            match classify(msg) {
                MessageClass::MediaOmitted => media.push(msg),
                MessageClass::Deleted => deleted += 1,
                MessageClass::Kept(text) => kept.push(Message::new(&msg.sender, text, msg.date)),
            }
        }

        let tracked = rank_top_two(&kept, &self.config.placeholder_name);
        let slot = |sender: &str| tracked.iter().position(|name| name == sender);

        let mut accumulators: [PersonAccumulator; 2] = Default::default();
        let mut monthly = MonthlyMatrix::new(&tracked[..]);

        for msg in &media {
            if let Some(i) = slot(&msg.sender) {
                accumulators[i].record_media();
            }
        }

        let mut ignored = 0usize;
        for msg in &kept {
            let Some(i) = slot(&msg.sender) else {
                ignored += 1;
                continue;
            };
            monthly.increment(msg.year(), msg.month(), &tracked[i]);
            accumulators[i].record(&msg.text, msg.date, reference_year);
        }

        debug!(
            kept = kept.len(),
            media = media.len(),
            deleted,
            ignored,
            person1 = %tracked[0],
            person2 = %tracked[1],
            "aggregated chat statistics"
        );

        let [first, second] = accumulators;
        let [name1, name2] = tracked;
        StatsResult {
            person1: person_stats(name1, &first, &monthly, today),
            person2: person_stats(name2, &second, &monthly, today),
            monthly,
        }
    }
}

/// Builds the output block for one participant.
fn person_stats(
    name: String,
    acc: &PersonAccumulator,
    monthly: &MonthlyMatrix,
    today: NaiveDate,
) -> PersonStats {
    let growth = monthly
        .months_of(today.year(), &name)
        .map_or(0.0, |months| monthly_growth(&months));

    PersonStats {
        messages: acc.messages,
        characters: acc.characters,
        average_length: average_length(acc.characters, acc.messages),
        sorry_count: acc.sorry_count,
        media_count: acc.media_count,
        link_count: acc.link_count,
        emoji_count: acc.emoji_count,
        active_days_percentage: active_days_percentage(acc.active_days.len(), today),
        monthly_growth: growth,
        name,
    }
}

/// Rounds to the given number of decimals.
///
/// The exact binary value is rounded (half-to-even), so `1.075`, stored as
/// `1.07499…`, rounds down to `1.07`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Mean characters per message, two decimals; 0.0 without messages.
pub fn average_length(characters: u64, messages: u64) -> f64 {
    if messages == 0 {
        return 0.0;
    }
    round_to(characters as f64 / messages as f64, 2)
}

/// Days from January 1 through `today`, inclusive, capped at 366.
pub fn days_elapsed(today: NaiveDate) -> u32 {
    today.ordinal().min(MAX_DAYS_IN_YEAR)
}

/// Share of this year's elapsed days with a message, one decimal.
pub fn active_days_percentage(active_days: usize, today: NaiveDate) -> f64 {
    let elapsed = days_elapsed(today);
    if elapsed == 0 {
        return 0.0;
    }
    round_to(active_days as f64 / f64::from(elapsed) * 100.0, 1)
}

/// Mean month-over-month percentage change, one decimal.
///
/// Transitions out of a month with no messages are skipped. Returns 0.0 when
/// no transition qualifies.
///
/// ```
/// use chatstats::core::analyzer::monthly_growth;
///
/// let mut months = [0; 12];
/// months[0] = 10;
/// months[1] = 15; // +50%
/// months[2] = 12; // -20%, then -100% into the empty April
/// assert_eq!(monthly_growth(&months), -23.3);
/// ```
pub fn monthly_growth(months: &[u64; 12]) -> f64 {
    let changes: Vec<f64> = months
        .windows(2)
        .filter(|pair| pair[0] > 0)
        .map(|pair| {
            let prev = pair[0] as f64;
            (pair[1] as f64 - prev) / prev * 100.0
        })
        .collect();

    if changes.is_empty() {
        return 0.0;
    }
    round_to(changes.iter().sum::<f64>() / changes.len() as f64, 1)
}
