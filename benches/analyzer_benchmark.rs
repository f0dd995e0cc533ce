//! Benchmarks for the morphological analyzer and phonological pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hangeul_morph::Analyzer;

const SHORT: &str = "친구가 학교에 갔습니다.";
const MEDIUM: &str = "친구가 학교에 갔습니다. 오늘은 좋은 날이다. 값이 읽고 독립 같이 앉다 싫어 놓고.";
const LONG: &str = "친구가 학교에 갔습니다. 오늘은 좋은 날이다. 값이 읽고 독립 같이 앉다 싫어 놓고. \
친구가 학교에 갔습니다. 오늘은 좋은 날이다. 값이 읽고 독립 같이 앉다 싫어 놓고. \
친구가 학교에 갔습니다. 오늘은 좋은 날이다. 값이 읽고 독립 같이 앉다 싫어 놓고.";

fn benchmark_analyze_short(c: &mut Criterion) {
    let analyzer = Analyzer::new().unwrap();
    c.bench_function("analyze_short", |b| {
        b.iter(|| analyzer.analyze(black_box(SHORT)))
    });
}

fn benchmark_analyze_medium(c: &mut Criterion) {
    let analyzer = Analyzer::new().unwrap();
    c.bench_function("analyze_medium", |b| {
        b.iter(|| analyzer.analyze(black_box(MEDIUM)))
    });
}

fn benchmark_analyze_long(c: &mut Criterion) {
    let analyzer = Analyzer::new().unwrap();
    c.bench_function("analyze_long", |b| {
        b.iter(|| analyzer.analyze(black_box(LONG)))
    });
}

fn benchmark_pronounce(c: &mut Criterion) {
    let analyzer = Analyzer::new().unwrap();
    c.bench_function("pronounce_medium", |b| {
        b.iter(|| analyzer.pronounce(black_box(MEDIUM)))
    });
}

fn benchmark_romanize(c: &mut Criterion) {
    let analyzer = Analyzer::new().unwrap();
    c.bench_function("romanize_standard_medium", |b| {
        b.iter(|| analyzer.romanize_standard(black_box(MEDIUM)))
    });
}

criterion_group!(
    benches,
    benchmark_analyze_short,
    benchmark_analyze_medium,
    benchmark_analyze_long,
    benchmark_pronounce,
    benchmark_romanize
);
criterion_main!(benches);
