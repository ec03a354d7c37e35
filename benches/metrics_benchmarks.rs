//! Metric computation benchmarks
//!
//! - Full evaluation (confusion matrix + ROC + both EER estimates)
//! - ROC curve construction over continuous scores
//! - Report rendering
//!
//! Toyota Way: Measure before optimizing (Genchi Genbutsu)

use binclass_report::demo::synthetic_record;
use binclass_report::metrics::{evaluate, RocCurve};
use binclass_report::report::{render_html, render_markdown, ExperimentResults};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_SIZE: usize = 1_000;
const MEDIUM_SIZE: usize = 100_000;

/// Benchmark full evaluation of hard predictions
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let record = synthetic_record(&mut StdRng::seed_from_u64(0), size).unwrap();
        group.bench_with_input(BenchmarkId::new("binary_labels", size), &record, |b, r| {
            b.iter(|| evaluate(black_box(r)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark ROC construction with many distinct thresholds
fn bench_roc_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("roc_curve");
    let mut rng = StdRng::seed_from_u64(42);

    let labels: Vec<u8> = (0..MEDIUM_SIZE).map(|_| rng.gen_range(0..2)).collect();
    let scores: Vec<f64> = (0..MEDIUM_SIZE).map(|_| rng.gen::<f64>()).collect();
    group.bench_function(BenchmarkId::new("continuous_scores", MEDIUM_SIZE), |b| {
        b.iter(|| RocCurve::from_scores(black_box(&labels), black_box(&scores)).unwrap());
    });

    group.finish();
}

/// Benchmark rendering of both tables for 100 experiments
fn bench_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut results = ExperimentResults::new();
    for i in 0..100 {
        let record = synthetic_record(&mut rng, SMALL_SIZE).unwrap();
        results.insert(format!("exp-{i:03}"), evaluate(&record).unwrap().metrics);
    }

    c.bench_function("render_markdown_100", |b| {
        b.iter(|| render_markdown(black_box(&results)));
    });
    c.bench_function("render_html_100", |b| {
        b.iter(|| render_html(black_box(&results)));
    });
}

criterion_group!(benches, bench_evaluate, bench_roc_continuous, bench_render);
criterion_main!(benches);
