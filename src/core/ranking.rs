//! Selection of the two tracked participants.

use std::collections::HashMap;

use crate::Message;

/// Name used to fill a missing participant slot.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Counts messages per sender, preserving first-appearance order.
pub fn sender_counts<'a, I>(senders: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for sender in senders {
        match index.get(sender) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(sender, order.len());
                order.push((sender.to_string(), 1));
            }
        }
    }

    order
}

/// Returns the two most active senders, most active first.
///
/// Ties keep the order in which senders first appear. Missing slots are
/// filled with `placeholder`.
///
/// ```
/// use chatstats::Message;
/// use chatstats::core::ranking::rank_top_two;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let messages = vec![
///     Message::new("Bob", "a", d),
///     Message::new("Alice", "b", d),
///     Message::new("Alice", "c", d),
/// ];
/// assert_eq!(rank_top_two(&messages, "Unknown"), ["Alice".to_string(), "Bob".to_string()]);
/// ```
pub fn rank_top_two(messages: &[Message], placeholder: &str) -> [String; 2] {
    let mut counts = sender_counts(messages.iter().map(|m| m.sender.as_str()));
    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut names = counts.into_iter().map(|(name, _)| name);
    let first = names.next().unwrap_or_else(|| placeholder.to_string());
    let second = names.next().unwrap_or_else(|| placeholder.to_string());
    [first, second]
}
