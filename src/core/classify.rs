//! Content classification for parsed messages.
//!
//! The marker strings and word lists below are matched verbatim against the
//! English WhatsApp export vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;

/// Placeholder WhatsApp writes instead of an attachment.
pub const MEDIA_OMITTED_MARKER: &str = "<Media omitted>";

/// Placeholders left behind by deleted messages.
pub const DELETED_MARKERS: [&str; 2] = ["This message was deleted", "You deleted this message"];

/// Suffixes appended to edited messages.
pub const EDITED_MARKERS: [&str; 1] = ["<This message was edited>"];

/// Apology spellings, matched case-insensitively.
pub const APOLOGY_WORDS: [&str; 6] = ["sry", "sorry", "sory", "Sorry", "SORRY", "SRY"];

/// Pattern for `http(s)://` and `www.` links.
pub const URL_PATTERN: &str = r#"https?://[^\s<>"]+|www\.[^\s<>"]+"#;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"));

/// How a message participates in the statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageClass {
    /// Attachment placeholder; only counted as media.
    MediaOmitted,
    /// Deleted message; ignored entirely.
    Deleted,
    /// Regular message with edit markers removed from its text.
    Kept(String),
}

/// Returns `true` if the text is an omitted-media placeholder.
pub fn is_media_omitted(text: &str) -> bool {
    text.contains(MEDIA_OMITTED_MARKER)
}

/// Returns `true` if the text contains a deleted-message marker.
pub fn is_deleted(text: &str) -> bool {
    DELETED_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Removes edit markers (exact, case-sensitive) and trims the result.
pub fn strip_edited_markers(text: &str) -> String {
    let mut result = text.to_string();
    for marker in EDITED_MARKERS {
        result = result.replace(marker, "").trim().to_string();
    }
    result
}

/// Classifies a message. Media placeholders win over deletion markers.
pub fn classify(message: &Message) -> MessageClass {
    if is_media_omitted(&message.text) {
        MessageClass::MediaOmitted
    } else if is_deleted(&message.text) {
        MessageClass::Deleted
    } else {
        MessageClass::Kept(strip_edited_markers(&message.text))
    }
}

/// Returns `true` if the text contains any apology spelling.
pub fn contains_apology(text: &str) -> bool {
    let lower = text.to_lowercase();
    APOLOGY_WORDS
        .iter()
        .any(|word| lower.contains(&word.to_lowercase()))
}

/// Returns `true` if the text contains at least one link.
pub fn contains_link(text: &str) -> bool {
    URL_REGEX.is_match(text)
}
