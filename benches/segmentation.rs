//! Segmentation throughput benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notetree::unicode::{BoundaryKind, WrapOptions, boundaries, wrap_text};
use std::hint::black_box;

fn samples() -> Vec<(&'static str, String)> {
    vec![
        (
            "ascii",
            "The quick brown fox jumps over the lazy dog. It's 3.14 o'clock! ".repeat(64),
        ),
        ("cjk", "日本語のテキストと한국어 문장、そして中文字符。".repeat(64)),
        (
            "emoji",
            "👨\u{200D}👩\u{200D}👧 🇺🇸🇫🇷 e\u{0301} 👍🏽 ".repeat(64),
        ),
    ]
}

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundaries");
    for (name, text) in samples() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        for kind in [
            BoundaryKind::Grapheme,
            BoundaryKind::Word,
            BoundaryKind::Sentence,
            BoundaryKind::Line,
        ] {
            group.bench_with_input(BenchmarkId::new(format!("{kind:?}"), name), &text, |b, text| {
                b.iter(|| boundaries(black_box(text), kind).count())
            });
        }
    }
    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let options = WrapOptions {
        width: Some(40),
        ..WrapOptions::default()
    };
    let mut group = c.benchmark_group("wrap");
    for (name, text) in samples() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| wrap_text(black_box(text), &options))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_boundaries, bench_wrap);
criterion_main!(benches);
