//! Benchmarks for the engine output parsers.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use sword_parse::xref::{self, SourceKind};
use sword_parse::{canon, lexicon, markup, search, verse};

const KJV_RANGE: &str = include_str!("../tests/fixtures/kjv_john_3_16_18.txt");
const TSK_VERSE: &str = include_str!("../tests/fixtures/tsk_john_3_16.txt");
const STRUCTURED_ENTRY: &str = include_str!("../tests/fixtures/strongs_greek_25_structured.txt");
const TAGGED_ENTRY: &str = include_str!("../tests/fixtures/strongs_greek_25_tagged.txt");
const PLAIN_ENTRY: &str = include_str!("../tests/fixtures/strongs_hebrew_430_plain.txt");
const SEARCH_LISTING: &str = include_str!("../tests/fixtures/search_love.txt");

/// A full chapter of annotated verse lines.
fn annotated_chapter() -> String {
    (1..=50)
        .map(|v| KJV_RANGE.lines().next().unwrap_or_default().replacen("3:16", &format!("3:{v}"), 1))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Canon & Normalizer Benchmarks
// ============================================================================

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_fuzzy", |b| {
        b.iter(|| {
            for input in ["gen", "1 kor", "psal", "openb", "Song of Sol", "xyz"] {
                black_box(canon::resolve(black_box(input), true));
            }
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_lines", |b| {
        b.iter(|| markup::normalize_lines(black_box(KJV_RANGE)));
    });
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parse_lookup(c: &mut Criterion) {
    let chapter = annotated_chapter();
    c.bench_function("parse_lookup_chapter", |b| {
        b.iter(|| verse::parse_lookup("John", 3, black_box(&chapter)));
    });
}

fn bench_xrefs(c: &mut Criterion) {
    c.bench_function("extract_grouped", |b| {
        b.iter(|| xref::extract_grouped(black_box(TSK_VERSE)));
    });
    c.bench_function("extract_flat", |b| {
        b.iter(|| xref::extract(black_box(TSK_VERSE), SourceKind::CrossReferenceModule));
    });
}

fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_entry");
    for (name, raw) in [
        ("structured", STRUCTURED_ENTRY),
        ("tagged", TAGGED_ENTRY),
        ("plain", PLAIN_ENTRY),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| lexicon::parse_entry("Strongs", "G25", black_box(raw.trim())));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("parse_search", |b| {
        b.iter(|| search::parse(black_box(SEARCH_LISTING), "love"));
    });
}

criterion_group!(
    benches,
    // Canon & normalizer
    bench_resolve,
    bench_normalize,
    // Parsers
    bench_parse_lookup,
    bench_xrefs,
    bench_dictionary,
    bench_search,
);
criterion_main!(benches);
