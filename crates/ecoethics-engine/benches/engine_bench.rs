// SPDX-License-Identifier: PMPL-1.0-or-later
//! Benchmarks for the calculation engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecoethics_engine::{calculate_all, ethical_risk, training_carbon, Scenario};
use ecoethics_metrics::{Hardware, Location, ModelType};

fn bench_training_carbon(c: &mut Criterion) {
    let intensity = Location::GlobalAverage.profile().carbon_intensity;

    c.bench_function("training_carbon", |b| {
        b.iter(|| {
            training_carbon(
                black_box(175.0),
                black_box(100_000.0),
                black_box(Hardware::NvidiaH100),
                black_box(1.2),
                black_box(intensity),
                black_box(ModelType::Dense),
            )
        })
    });
}

fn bench_ethical_risk(c: &mut Criterion) {
    c.bench_function("ethical_risk", |b| {
        b.iter(|| ethical_risk(black_box(175.0), black_box(ModelType::MixtureOfExperts)))
    });
}

fn bench_calculate_all(c: &mut Criterion) {
    let input = Scenario::default()
        .resolve()
        .expect("default scenario is valid");

    c.bench_function("calculate_all", |b| {
        b.iter(|| calculate_all(black_box(&input)))
    });
}

fn bench_resolve_scenario(c: &mut Criterion) {
    let scenario = Scenario::default();

    c.bench_function("resolve_scenario", |b| {
        b.iter(|| black_box(&scenario).resolve())
    });
}

criterion_group!(
    benches,
    bench_training_carbon,
    bench_ethical_risk,
    bench_calculate_all,
    bench_resolve_scenario
);
criterion_main!(benches);
