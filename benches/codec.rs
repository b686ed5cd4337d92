#![allow(missing_docs)]
use criterion::{Criterion, criterion_group, criterion_main};
use kinded::codec::json;
use kinded::factory::{ConverterFactory, TypeDescriptor};
use kinded::{Optional, Outcome};
use serde::{Deserialize, Serialize};
use std::hint::black_box;

#[derive(Serialize, Deserialize, Clone)]
struct Sample {
    id: u64,
    label: String,
    score: Optional<f64>,
}

type Batch = Outcome<Vec<Sample>, String>;

fn make_batch(count: u64) -> Batch {
    Outcome::ok(
        (0..count)
            .map(|i| Sample {
                id: i,
                label: format!("sample-{i}"),
                score: if i % 3 == 0 { Optional::none() } else { Optional::some(i as f64 * 0.5) },
            })
            .collect(),
    )
}

fn bench_codec(c: &mut Criterion) {
    let batch = make_batch(10_000);
    let text = json::to_string(&batch).expect("Failed to encode batch");

    let mut group = c.benchmark_group("Tagged Union Codec");

    group.bench_function("write_batch", |b| {
        b.iter(|| black_box(json::to_string(black_box(&batch)).expect("Failed to encode")));
    });

    group.bench_function("read_batch", |b| {
        b.iter(|| {
            let back: Batch = json::from_str(black_box(&text)).expect("Failed to decode");
            black_box(back);
        });
    });

    group.bench_function("read_small", |b| {
        b.iter(|| {
            let v: Optional<i64> =
                json::from_str(black_box(r#"{"Kind":"Some","Some":42}"#)).expect("Failed to decode");
            black_box(v);
        });
    });

    group.finish();
}

fn bench_factory(c: &mut Criterion) {
    let mut factory = ConverterFactory::new();
    factory
        .register(&TypeDescriptor::of::<Optional<i64>>())
        .expect("Failed to register converter");
    let value = Optional::some(7_i64);

    let mut group = c.benchmark_group("Converter Factory");

    group.bench_function("dynamic_write", |b| {
        b.iter(|| black_box(factory.write_value(black_box(&value)).expect("Failed to write")));
    });

    group.bench_function("create_converter", |b| {
        let ty = TypeDescriptor::of::<Outcome<String, i32>>();
        let opts = factory.options();
        b.iter(|| black_box(factory.create_converter(&ty, opts).expect("Failed to create")));
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_factory);
criterion_main!(benches);
