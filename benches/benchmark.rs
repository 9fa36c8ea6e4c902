use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aqua_calc::bands::{Band, BandSample};
use aqua_calc::engine::compute;
use aqua_calc::series::{DatedSample, SampleSeries};

fn full_sample() -> BandSample {
    BandSample::new()
        .with(Band::Blue, 0.05)
        .with(Band::Green, 0.08)
        .with(Band::Red, 0.10)
        .with(Band::Nir, 0.20)
        .with(Band::Swir945, 0.12)
        .with(Band::Swir1600, 0.02)
        .with(Band::Swir2200, 0.01)
}

/// Benchmark the core catalog evaluation in isolation
fn benchmark_compute(c: &mut Criterion) {
    let sample = full_sample();

    c.bench_function("catalog_compute", |b| {
        b.iter(|| compute(black_box(&sample), None))
    });
}

/// Benchmark a year of daily acquisitions through the series pipeline
fn benchmark_series_evaluation(c: &mut Criterion) {
    let samples = (0..365)
        .map(|day| DatedSample {
            date: format!("2025-{:02}-{:02}", day / 31 + 1, day % 31 + 1),
            bands: full_sample(),
        })
        .collect();
    let series = SampleSeries::new(samples);

    c.bench_function("series_evaluation", |b| {
        b.iter(|| black_box(&series).evaluate(None))
    });
}

criterion_group!(benches, benchmark_compute, benchmark_series_evaluation);
criterion_main!(benches);
