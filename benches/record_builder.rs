//! Benchmarks for record assembly and scoring.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use predecir::prelude::*;

fn schema_of(n_slots: usize) -> FeatureSchema {
    let slots = (0..n_slots)
        .map(|i| {
            if i % 2 == 0 {
                FeatureSlot::continuous(format!("feature_{i}"))
            } else {
                FeatureSlot::categorical(format!("feature_{i}"))
            }
        })
        .collect();
    FeatureSchema::new(slots).expect("generated slots are valid")
}

fn inputs_for(schema: &FeatureSchema) -> RawInputs {
    schema
        .iter()
        .enumerate()
        .map(|(i, slot)| (slot.name().to_string(), RawValue::from(i as i32)))
        .collect()
}

fn bench_record_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_build");

    for size in [8, 16, 32].iter() {
        let schema = schema_of(*size);
        let inputs = inputs_for(&schema);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let builder = FeatureRecordBuilder::new(&schema);
            b.iter(|| builder.build(black_box(&inputs)).unwrap());
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");

    for size in [8, 16, 32].iter() {
        let schema = schema_of(*size);
        let inputs = inputs_for(&schema);
        let scorer = LogisticScorer::new(vec![0.01; *size], -0.5);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                predict_probability(black_box(&inputs), &schema, &scorer).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_build, bench_predict);
criterion_main!(benches);
