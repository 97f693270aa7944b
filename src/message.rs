//! Parsed chat message type.
//!
//! [`Message`] is what the WhatsApp parser emits for every dated message line
//! it recognizes (together with any continuation lines that follow it). The
//! aggregator reads these values and never mutates them.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let msg = Message::new("Alice", "Hello, world!", date);
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "Hello, world!");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let msg = Message::new("Alice", "Hello!", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains("2024-03-01"));
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single chat message reconstructed from an export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Trimmed display name of the author |
/// | `text` | `String` | Trimmed body, may span several lines |
/// | `date` | `NaiveDate` | Calendar day the message was sent |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Message body.
    ///
    /// Multi-line messages keep their embedded newlines. May be empty when
    /// the original message consisted of whitespace only.
    pub text: String,

    /// Day the message was sent. Years are always four digits.
    pub date: NaiveDate,
}

impl Message {
    /// Creates a new message.
    pub fn new(sender: impl Into<String>, text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            date,
        }
    }

    /// Returns the sender's name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the day the message was sent.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the calendar year of the message.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month of the message (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
