//! Benchmarks for chatstats parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- analyze`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::config::StatsConfig;
use chatstats::core::models::OutputConfig;
use chatstats::core::{Analyzer, to_json};
use chatstats::parser::{Parser, WhatsAppParser};

use chrono::NaiveDate;

// =============================================================================
// Test Data Generators
// =============================================================================

const TEXTS: [&str; 6] = [
    "Message number",
    "sorry, running late",
    "look https://example.com/page",
    "🎉🔥 party tonight",
    "<Media omitted>",
    "multi\nline continuation",
];

fn generate_whatsapp_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = match i % 3 {
            0 => "Alice",
            1 => "Bob",
            _ => "Carol",
        };
        let day = i % 28 + 1;
        let month = (i / 28) % 12 + 1;
        let year = 20 + (i / 336) % 8;
        lines.push(format!(
            "{}/{}/{}, {}:{:02} - {}: {} {}",
            day,
            month,
            year,
            i % 24,
            i % 60,
            sender,
            TEXTS[i % TEXTS.len()],
            i
        ));
    }
    lines.join("\n")
}

fn config() -> StatsConfig {
    StatsConfig::new().with_reference_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = WhatsAppParser::new();

    for size in [100, 1_000, 10_000] {
        let content = generate_whatsapp_txt(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("whatsapp", size), &content, |b, content| {
            b.iter(|| parser.parse_str(black_box(content)));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::with_config(config());

    for size in [100, 1_000, 10_000] {
        let messages = WhatsAppParser::new().parse_str(&generate_whatsapp_txt(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("stats", size), &messages, |b, messages| {
            b.iter(|| analyzer.analyze(black_box(messages)));
        });
    }

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let messages = WhatsAppParser::new().parse_str(&generate_whatsapp_txt(1_000));
    let result = Analyzer::with_config(config()).analyze(&messages);

    group.bench_function("json_compact", |b| {
        b.iter(|| to_json(black_box(&result), &OutputConfig::new()));
    });
    group.bench_function("json_pretty", |b| {
        b.iter(|| to_json(black_box(&result), &OutputConfig::new().with_pretty()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_analyze, bench_output);
criterion_main!(benches);
