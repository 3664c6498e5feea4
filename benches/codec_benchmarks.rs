use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snowfield::{hex, SnowflakeGenerator};

// Common test values used across benchmarks
const TEST_VALUES: [u64; 5] = [
    1,            // Small number
    1000,         // Medium number
    1_000_000,    // Large number
    u64::MAX / 2, // Very large number
    u64::MAX,     // Maximum u64
];

pub fn id_form_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("ID Form Comparison");
    let generator = SnowflakeGenerator::new();

    group.bench_function("i64", |b| {
        b.iter(|| black_box(generator.next_i64(&[0, 1])));
    });

    group.bench_function("bytes", |b| {
        b.iter(|| black_box(generator.next_bytes(&[0, 1])));
    });

    group.bench_function("hex", |b| {
        b.iter(|| black_box(generator.next_hex(&[0, 1])));
    });

    group.finish();
}

pub fn hex_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hex Encoding");

    for &value in &TEST_VALUES {
        group.bench_with_input(BenchmarkId::new("encode", value), &value, |b, &value| {
            b.iter(|| black_box(hex::encode(black_box(value))));
        });
        group.bench_with_input(BenchmarkId::new("encode_array", value), &value, |b, &value| {
            b.iter(|| black_box(hex::encode_array(black_box(value))));
        });
    }

    group.finish();
}

pub fn hex_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hex Decoding");

    for &value in &TEST_VALUES {
        let encoded = hex::encode(value);
        group.bench_with_input(BenchmarkId::new("decode", value), &encoded, |b, encoded| {
            b.iter(|| black_box(hex::decode(black_box(encoded))));
        });
    }

    let generator = SnowflakeGenerator::new();
    let encoded = generator.next_hex(&[0, 1]);
    group.bench_function("parse_hex", |b| {
        b.iter(|| black_box(generator.parse_hex(black_box(&encoded))));
    });

    group.finish();
}

criterion_group!(benches, id_form_comparison, hex_encoding, hex_decoding);
criterion_main!(benches);
