//! Benchmarks for machine generation and message encoding.
//!
//! Measures definition generation time, serialization, and encode
//! throughput over messages of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use enigma::generate::random_definition;
use enigma::{Encoder, MachineDefinition, RotorSelection};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 2024;

/// Benchmarks full machine definition generation (5 wirings + reflector).
fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_definition", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);
        b.iter(|| black_box(random_definition(&mut rng)));
    });
}

/// Benchmarks the serialize/deserialize/validate round trip.
fn bench_codec(c: &mut Criterion) {
    let definition = random_definition(&mut ChaCha8Rng::seed_from_u64(BENCH_SEED));
    let bytes = definition.to_bytes();

    c.bench_function("definition_to_bytes", |b| {
        b.iter(|| black_box(definition.to_bytes()));
    });
    c.bench_function("definition_from_bytes", |b| {
        b.iter(|| MachineDefinition::from_bytes(black_box(&bytes)).unwrap());
    });
}

/// Benchmarks encode throughput across message sizes.
///
/// The encoder is rebuilt per iteration, matching real usage: one machine
/// per message, never reused.
fn bench_encode(c: &mut Criterion) {
    let definition = random_definition(&mut ChaCha8Rng::seed_from_u64(BENCH_SEED));
    let selection: RotorSelection = "1:12:3,4:16:12,5:1:4".parse().unwrap();

    let mut group = c.benchmark_group("encode");
    for size in [64usize, 1024, 16 * 1024] {
        let message: Vec<u8> = b"attack at dawn. "
            .iter()
            .cycle()
            .take(size)
            .copied()
            .collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| {
                let mut encoder = Encoder::new(&definition, &selection);
                black_box(encoder.encode(black_box(message)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_codec, bench_encode);
criterion_main!(benches);
