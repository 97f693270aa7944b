//! Heuristic emoji counting.
//!
//! Counts code points that fall inside a fixed set of Unicode blocks and adds
//! one per message that contains a sequence modifier. This approximates, but
//! does not equal, the number of emoji grapheme clusters.

/// Inclusive code point ranges treated as emoji, sorted and non-overlapping.
///
/// Merged from the block list:
/// Miscellaneous Symbols, Dingbats (0x2600..=0x27BF);
/// Mahjong through Symbols for Legacy Computing, including emoticons,
/// pictographs, transport symbols, regional indicators and the extended
/// pictograph blocks (0x1F000..=0x1FFFF);
/// CJK Unified Ideographs Extensions B to F and the CJK Compatibility
/// Ideographs Supplement;
/// Tags and Variation Selectors Supplement;
/// 0xFE000 to the end of the Supplementary Private Use Area-B.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x2600, 0x27BF),
    (0x1F000, 0x1FFFF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2EBEF),
    (0x2F800, 0x2FA1F),
    (0xE0000, 0xE007F),
    (0xE0100, 0xE01EF),
    (0xFE000, 0x10FFFF),
];

/// Zero-width joiner, variation selector 16 and the skin-tone modifiers.
pub const SEQUENCE_MODIFIERS: [char; 7] = [
    '\u{200D}',
    '\u{FE0F}',
    '\u{1F3FB}',
    '\u{1F3FC}',
    '\u{1F3FD}',
    '\u{1F3FE}',
    '\u{1F3FF}',
];

/// Returns `true` if `c` falls inside one of [`EMOJI_RANGES`].
pub fn is_emoji_code_point(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Counts emoji in a message body.
///
/// ```
/// use chatstats::core::emoji::count_emoji;
///
/// assert_eq!(count_emoji("hi 😀😀"), 2);
/// // ZWJ sequence: two pictographs + one bonus for the joiner
/// assert_eq!(count_emoji("👩\u{200D}💻"), 3);
/// ```
pub fn count_emoji(text: &str) -> u64 {
    let in_ranges = text.chars().filter(|&c| is_emoji_code_point(c)).count() as u64;
    let has_modifier = text.chars().any(|c| SEQUENCE_MODIFIERS.contains(&c));
    in_ranges + u64::from(has_modifier)
}
