//! Constant-name derivation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use encreg_bench::all_names;
use encreg_core::derive_constant_names;
use encreg_db::InMemoryDatabase;

/// Benchmark derivation for names of each shape.
fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for name in ["UTF-8", "ASCII", "Shift_JIS", "eucJP", "ANSI_X3.4-1968", "8BIT"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| black_box(derive_constant_names(black_box(name.as_bytes()))));
        });
    }

    group.finish();
}

/// Benchmark derivation over every built-in name, as done at startup.
fn bench_derive_all(c: &mut Criterion) {
    let names = all_names(&InMemoryDatabase::builtin());
    let mut group = c.benchmark_group("derive_all");
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("builtin", |b| {
        b.iter(|| {
            for name in &names {
                black_box(derive_constant_names(name.as_bytes()));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive, bench_derive_all);
criterion_main!(benches);
