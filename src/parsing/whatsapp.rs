//! WhatsApp export line classification.
//!
//! Exports are line oriented. Every message starts on a line such as
//! `15/01/24, 10:30 - Alice: Hello`; lines without that prefix either continue
//! the previous message or are noise. System notices share the date prefix but
//! carry no `Sender:` part (`15/01/24, 10:30 - Alice added Bob`).
//!
//! The helpers here only classify a single line. Assembling messages across
//! lines is done by [`WhatsAppParser`](crate::parser::WhatsAppParser).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `D/M/Y, TIME - SENDER: TEXT`
static MESSAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s+(.+?)\s-\s([^:]+):\s(.*)$")
        .expect("message line pattern is valid")
});

/// `D/M/Y, TIME - TEXT`
static SYSTEM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s+(.+?)\s-\s(.*)$")
        .expect("system line pattern is valid")
});

/// Characters WhatsApp uses in place of ordinary spaces around timestamps.
const SPECIAL_SPACES: [char; 2] = [
    '\u{202F}', // narrow no-break space
    '\u{00A0}', // no-break space
];

/// Characters trimmed from both ends of a normalized line.
const EDGE_NOISE: [char; 3] = ['\u{FEFF}', '\n', '\r'];

/// Separator between the timestamp and the rest of a dated line.
const SEPARATOR: &str = " - ";

/// A line that starts a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedLine<'a> {
    /// Day the message was sent, or `None` if the written date does not exist.
    pub date: Option<NaiveDate>,
    /// Sender exactly as captured (not trimmed).
    pub sender: &'a str,
    /// First line of the message body.
    pub text: &'a str,
}

/// Classification of a single normalized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Start of a new message.
    Message(DatedLine<'a>),
    /// Dated notice without a sender (group created, member added, ...).
    System,
    /// Anything else: a continuation line or an orphan.
    Other,
}

/// Characters that end a line. `\r\n` counts as a single terminator.
const LINE_TERMINATORS: [char; 10] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Iterator over the physical lines of an export, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((end, terminator)) = self
            .rest
            .char_indices()
            .find(|(_, c)| LINE_TERMINATORS.contains(c))
        else {
            return Some(std::mem::take(&mut self.rest));
        };

        let line = &self.rest[..end];
        let mut next = end + terminator.len_utf8();
        if terminator == '\r' && self.rest[next..].starts_with('\n') {
            next += 1;
        }
        self.rest = &self.rest[next..];
        Some(line)
    }
}

/// Splits an export into physical lines.
///
/// Besides `\n` and `\r\n`, a lone `\r`, vertical tab, form feed, the
/// information separators `U+1C..=U+1E`, `U+85` and the Unicode line and
/// paragraph separators all end a line. A trailing terminator does not
/// produce a final empty line.
///
/// ```
/// use chatstats::parsing::whatsapp::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\rb\r\nc\u{2028}d\n").collect();
/// assert_eq!(lines, ["a", "b", "c", "d"]);
/// ```
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// Replaces WhatsApp's special spaces and trims BOM and line terminators.
///
/// # Example
///
/// ```
/// use chatstats::parsing::whatsapp::normalize_line;
///
/// assert_eq!(normalize_line("\u{FEFF}1/1/24, 10:00\u{202F}AM - A: hi\r"), "1/1/24, 10:00 AM - A: hi");
/// ```
pub fn normalize_line(raw: &str) -> String {
    raw.replace(&SPECIAL_SPACES[..], " ")
        .trim_matches(&EDGE_NOISE[..])
        .to_string()
}

/// First code point (digit zero) of every run of ten decimal digits.
///
/// `\d` matches any of these scripts, so captured date fields are converted
/// digit by digit instead of with `str::parse`.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Numeric value of a decimal digit in any script.
pub fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    let code = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= code).checked_sub(1)?;
    let value = code - DIGIT_ZEROS[run];
    (value < 10).then_some(value)
}

/// Parses a run of decimal digits from any script, e.g. `"٢٤"` as 24.
pub fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

/// Expands a 2-digit year into the 2000s; other lengths are taken as written.
pub fn parse_year(year: &str) -> Option<i32> {
    let value = i32::try_from(parse_digits(year)?).ok()?;
    if year.chars().count() == 2 {
        Some(2000 + value)
    } else {
        Some(value)
    }
}

/// Builds a calendar date from the day/month/year captures of a dated line.
///
/// Returns `None` for dates that do not exist, such as `32/13/24`, and for
/// years before 1.
pub fn build_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let year = parse_year(year).filter(|&year| year >= 1)?;
    NaiveDate::from_ymd_opt(year, parse_digits(month)?, parse_digits(day)?)
}

/// Classifies a normalized line (see [`normalize_line`]).
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(caps) = MESSAGE_LINE.captures(line) {
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        return LineKind::Message(DatedLine {
            date: build_date(field(1), field(2), field(3)),
            sender: field(5),
            text: field(6),
        });
    }

    if is_system_line(line) {
        return LineKind::System;
    }

    LineKind::Other
}

/// A dated line whose remainder after the first `" - "` has no colon.
fn is_system_line(line: &str) -> bool {
    if !SYSTEM_LINE.is_match(line) {
        return false;
    }
    let remainder = line
        .split_once(SEPARATOR)
        .map_or(line, |(_, rest)| rest);
    !remainder.contains(':')
}
