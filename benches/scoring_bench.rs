use criterion::{criterion_group, criterion_main, Criterion};
use potability::scoring::{potability_score, score_breakdown};
use potability::validation::validate;
use potability::{ParameterKey, ParameterSet};
use std::hint::black_box;

fn sample_sets() -> Vec<ParameterSet> {
    vec![
        ParameterSet::default(),
        ParameterSet::uniform(0.0),
        ParameterSet::default()
            .with(ParameterKey::Ph, 5.5)
            .with(ParameterKey::Solids, 900.0)
            .with(ParameterKey::Turbidity, 6.0),
    ]
}

fn bench_scoring(c: &mut Criterion) {
    let sets = sample_sets();

    c.bench_function("potability_score", |b| {
        b.iter(|| {
            for params in &sets {
                black_box(potability_score(black_box(params)));
            }
        })
    });

    c.bench_function("score_breakdown", |b| {
        b.iter(|| {
            for params in &sets {
                black_box(score_breakdown(black_box(params)));
            }
        })
    });

    c.bench_function("validate", |b| {
        b.iter(|| {
            for params in &sets {
                black_box(validate(black_box(params)));
            }
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
