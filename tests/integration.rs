//! Integration tests for the parse + aggregate pipeline.

use chatstats::prelude::*;
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config(today: NaiveDate) -> StatsConfig {
    StatsConfig::new().with_reference_date(today)
}

const CHAT: &str = "\u{FEFF}1/1/24, 10:00 - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
1/1/24, 10:00 - Alice: Happy new year! 🎉
1/1/24, 10:01 - Bob: You too 😀😀
1/1/24, 10:02 - Alice: sorry I missed your call
it was loud here
2/1/24, 9:00 - Alice: <Media omitted>
2/1/24, 9:05 - Bob: This message was deleted
3/1/24, 9:00 - Alice: oops sry sry
3/1/24, 9:01 - Alice: check https://example.com and www.example.org
15/2/24, 20:00 - Bob: fixed it <This message was edited>
15/2/24, 20:01 - Carol: hello?
15/2/24, 20:02 - Alice added Dave
15/2/2024, 20:03 - Bob: 👍🏽";

#[test]
fn test_scenario_two_simple_messages() {
    let stats = analyze_str(
        "1/1/24, 10:00 - Alice: Hello\n1/1/24, 10:05 - Bob: Hi Alice",
        &config(day(2024, 6, 1)),
    );

    assert_eq!(stats.person1.name, "Alice");
    assert_eq!(stats.person2.name, "Bob");
    assert_eq!(stats.person1.messages, 1);
    assert_eq!(stats.person2.messages, 1);
    assert_eq!(stats.monthly.get(2024, 1, "Alice"), Some(1));
    assert_eq!(stats.monthly.get(2024, 1, "Bob"), Some(1));
}

#[test]
fn test_full_chat_parse() {
    let messages = WhatsAppParser::new().parse_str(CHAT);
    // The encryption notice and the "added" notice are system lines
    assert_eq!(messages.len(), 10);
    assert_eq!(messages[2].text, "sorry I missed your call\nit was loud here");
    assert_eq!(messages[9].date, day(2024, 2, 15));
}

#[test]
fn test_full_chat_stats() {
    let stats = analyze_str(CHAT, &config(day(2024, 2, 29)));
    let alice = &stats.person1;
    let bob = &stats.person2;

    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.messages, 4);
    assert_eq!(alice.media_count, 1);
    assert_eq!(alice.sorry_count, 2);
    assert_eq!(alice.link_count, 1);
    assert_eq!(alice.emoji_count, 1);

    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.messages, 3);
    assert_eq!(bob.media_count, 0);
    // 😀😀 = 2; 👍🏽 = 2 code points in range + 1 modifier bonus
    assert_eq!(bob.emoji_count, 5);
    assert_eq!(bob.characters, "You too 😀😀".chars().count() as u64 + 8 + 2);

    assert_eq!(stats.monthly.get(2024, 1, "Alice"), Some(4));
    assert_eq!(stats.monthly.get(2024, 2, "Bob"), Some(2));
    assert_eq!(stats.monthly.get(2024, 2, "Carol"), None);
}

#[test]
fn test_full_chat_derived_metrics() {
    let stats = analyze_str(CHAT, &config(day(2024, 2, 29)));

    // Alice: Jan 1 and Jan 3 active, 60 days elapsed
    assert_eq!(stats.person1.active_days_percentage, 3.3);
    // Alice: Jan 4 -> Feb 0 is the only transition (-100%)
    assert_eq!(stats.person1.monthly_growth, -100.0);
    // Bob: Jan 1 -> Feb 2 is +100%, Feb 2 -> Mar 0 is -100%
    assert_eq!(stats.person2.monthly_growth, 0.0);
}

#[test]
fn test_average_length_consistency() {
    let stats = analyze_str(CHAT, &config(day(2024, 12, 31)));
    for person in [&stats.person1, &stats.person2] {
        let expected = person.characters as f64 / person.messages as f64;
        assert!((person.average_length - expected).abs() <= 0.005);
    }
}

#[test]
fn test_other_year_has_no_active_days() {
    let stats = analyze_str(CHAT, &config(day(2025, 6, 1)));
    assert_eq!(stats.person1.active_days_percentage, 0.0);
    assert_eq!(stats.person1.monthly_growth, 0.0);
    // Matrix is unaffected by the reference day
    assert_eq!(stats.monthly.get(2024, 1, "Alice"), Some(4));
}

#[test]
fn test_analyze_bytes_matches_analyze_str() {
    let cfg = config(day(2024, 3, 1));
    assert_eq!(analyze_bytes(CHAT.as_bytes(), &cfg), analyze_str(CHAT, &cfg));
}

#[test]
fn test_analyze_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    std::fs::write(&path, CHAT).unwrap();

    let cfg = config(day(2024, 3, 1));
    let stats = analyze_file(&path, &cfg).unwrap();
    assert_eq!(stats, analyze_str(CHAT, &cfg));
}

#[test]
fn test_analyze_file_missing() {
    let err = analyze_file("does/not/exist.txt".as_ref(), &StatsConfig::new()).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_json_report_shape() {
    let stats = analyze_str(CHAT, &config(day(2024, 2, 29)));
    let json = to_json(&stats, &OutputConfig::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["person1"]["name"], "Alice");
    assert_eq!(value["person2"]["messages"], 3);
    assert_eq!(value["monthly"]["2024"]["2"]["Bob"], 2);

    let years: Vec<&String> = value["monthly"].as_object().unwrap().keys().collect();
    assert_eq!(
        years,
        ["2020", "2021", "2022", "2023", "2024", "2025", "2026", "2027"]
    );
    for year in value["monthly"].as_object().unwrap().values() {
        assert_eq!(year.as_object().unwrap().len(), 12);
    }
}

#[test]
fn test_custom_analyzer() {
    let messages = WhatsAppParser::new().parse_str("1/1/24, 10:00 - Alice: only me");
    let stats = Analyzer::with_config(config(day(2024, 1, 1)).with_placeholder_name("Nobody"))
        .analyze(&messages);
    assert_eq!(stats.person2.name, "Nobody");
    assert_eq!(stats.monthly.get(2024, 1, "Nobody"), Some(0));
}
