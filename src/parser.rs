//! Message parser for WhatsApp TXT exports.
//!
//! The parser walks the export line by line and rebuilds multi-line messages.
//! It never fails on content: system notices, orphan lines and lines carrying
//! impossible dates are skipped silently. Only reading from disk can fail.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::{Parser, WhatsAppParser};
//!
//! let export = "1/1/24, 10:00 - Alice: Hello\n\
//!               second line\n\
//!               1/1/24, 10:05 - Bob: Hi Alice";
//!
//! let messages = WhatsAppParser::new().parse_str(export);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].text, "Hello\nsecond line");
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::Message;
use crate::error::Result;
use crate::parsing::whatsapp::{LineKind, classify_line, normalize_line, split_lines};

/// Trait for chat export parsers.
///
/// Implementors only provide [`parse_str`](Parser::parse_str); byte and file
/// input are decoded and forwarded to it.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses export text into messages in file order.
    fn parse_str(&self, content: &str) -> Vec<Message>;

    /// Parses raw export bytes.
    ///
    /// Invalid UTF-8 sequences are dropped rather than replaced or reported.
    fn parse_bytes(&self, bytes: &[u8]) -> Vec<Message> {
        self.parse_str(&decode_lossy(bytes))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`](crate::ChatstatsError::Io) if the file
    /// cannot be read.
    fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        Ok(self.parse_bytes(&bytes))
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
///
/// ```
/// use chatstats::parser::decode_lossy;
///
/// assert_eq!(decode_lossy(b"ok\xFF\xFEay"), "okay");
/// ```
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Parser for WhatsApp TXT exports using day/month/year dates.
///
/// Recognized message lines look like `15/1/24, 10:30 - Alice: Hello`. Both
/// 2- and 4-digit years are accepted; 2-digit years are placed in the 2000s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppParser;

impl WhatsAppParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse_str(&self, content: &str) -> Vec<Message> {
        let mut state = ParseState::default();
        let mut messages = Vec::new();
        let mut skipped = 0usize;

        for raw_line in split_lines(content) {
            let line = normalize_line(raw_line);

            match classify_line(&line) {
                LineKind::Message(dated) => {
                    state.flush_into(&mut messages);
                    let Some(date) = dated.date else {
                        trace!(line = %line, "skipping line with invalid date");
                        skipped += 1;
                        continue;
                    };
                    state.start(dated.sender, date, dated.text);
                }
                LineKind::System => {
                    state.flush_into(&mut messages);
                }
                LineKind::Other => {
                    if state.in_progress() {
                        state.push_continuation(raw_line);
                    } else {
                        skipped += 1;
                    }
                }
            }
        }

        state.flush_into(&mut messages);

        debug!(
            messages = messages.len(),
            skipped, "parsed WhatsApp export"
        );
        messages
    }
}

/// In-progress message while walking an export.
#[derive(Debug, Default)]
struct ParseState {
    current_sender: Option<String>,
    current_text_parts: Vec<String>,
    current_date: Option<NaiveDate>,
}

impl ParseState {
    fn in_progress(&self) -> bool {
        self.current_sender.is_some()
    }

    fn start(&mut self, sender: &str, date: NaiveDate, text: &str) {
        self.current_sender = Some(sender.to_string());
        self.current_date = Some(date);
        self.current_text_parts = vec![text.to_string()];
    }

    fn push_continuation(&mut self, line: &str) {
        self.current_text_parts.push(line.to_string());
    }

    /// Emits the in-progress message, if complete, and resets the state.
    fn flush_into(&mut self, messages: &mut Vec<Message>) {
        let state = std::mem::take(self);
        if let (Some(sender), Some(date)) = (state.current_sender, state.current_date) {
            let text = state.current_text_parts.join("\n");
            messages.push(Message::new(sender.trim(), text.trim(), date));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(content: &str) -> Vec<Message> {
        WhatsAppParser::new().parse_str(content)
    }

    #[test]
    fn test_parser_name() {
        assert_eq!(WhatsAppParser::new().name(), "WhatsApp");
    }

    #[test]
    fn test_two_messages() {
        let messages = parse("1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi Alice");
        assert_eq!(
            messages,
            vec![
                Message::new("Alice", "Hello", day(2024, 1, 1)),
                Message::new("Bob", "Hi Alice", day(2024, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_multiline_message_keeps_raw_continuations() {
        let messages = parse(
            "2/3/2024, 09:00 - Alice: first\n  indented\u{00A0}line\n\n1/1/24, 10:05 - Bob: next",
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "first\n  indented\u{00A0}line");
        assert_eq!(messages[0].date, day(2024, 3, 2));
    }

    #[test]
    fn test_system_line_ends_message() {
        let messages = parse(
            "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:01 - Alice added Bob\nstray continuation",
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "Hello");
    }

    #[test]
    fn test_orphan_lines_before_first_message() {
        let messages = parse("header line\nanother\n1/1/24, 10:00 - Alice: Hello");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Alice");
    }

    #[test]
    fn test_invalid_date_skips_line_and_its_continuations() {
        let messages = parse(
            "1/1/24, 10:00 - Alice: before\n32/13/24, 9:00 - Alice: test\ndangling\n2/1/24, 9:00 - Bob: after",
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "before");
        assert_eq!(messages[1].text, "after");
    }

    #[test]
    fn test_sender_is_trimmed_and_whitespace_text_is_empty() {
        let messages = parse("1/1/24, 10:00 -  Alice : \u{202F}  ");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Alice");
        assert_eq!(messages[0].text, "");
    }

    #[test]
    fn test_bom_and_crlf() {
        let messages = parse("\u{FEFF}1/1/24, 10:00 - Alice: Hello\r\n1/1/24, 10:05 - Bob: Hi\r\n");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].text, "Hi");
    }

    #[test]
    fn test_carriage_return_only_export() {
        let messages = parse(
            "1/1/24, 10:00 - Alice: Hello\r1/1/24, 10:05 - Bob: Hi\r2/1/24, 10:06 - Alice: again",
        );
        assert_eq!(
            messages,
            vec![
                Message::new("Alice", "Hello", day(2024, 1, 1)),
                Message::new("Bob", "Hi", day(2024, 1, 1)),
                Message::new("Alice", "again", day(2024, 1, 2)),
            ]
        );
    }

    #[test]
    fn test_unicode_line_separators_split_messages() {
        let messages = parse(
            "1/1/24, 10:00 - Alice: one\u{2028}more\u{2029}1/1/24, 10:01 - Bob: two\u{85}3/1/24, 9:00 - Bob: three",
        );
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, "one\nmore");
        assert_eq!(messages[1].text, "two");
        assert_eq!(messages[2].date, day(2024, 1, 3));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
    }

    #[test]
    fn test_parse_bytes_drops_invalid_sequences() {
        let bytes = b"1/1/24, 10:00 - Al\xFFice: He\xC3llo";
        let messages = WhatsAppParser::new().parse_bytes(bytes);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Alice");
        assert_eq!(messages[0].text, "Hello");
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let err = WhatsAppParser::new()
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
