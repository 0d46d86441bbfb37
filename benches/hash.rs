use std::hash::{BuildHasher, Hash, Hasher};

use brittmap::hash::{CStrBuildHasher, IntBuildHasher, PairBuildHasher, PointerBuildHasher, QuadBuildHasher};
use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion, Throughput};
use once_cell::sync::Lazy;
use rand::Rng;

const TOTAL_KEYS: u64 = 10_000;

static RANDOM_KEYS: Lazy<Vec<u64>> = Lazy::new(|| {
    let mut rng = rand::thread_rng();
    (0..TOTAL_KEYS).map(|_| rng.gen_range(0, u64::MAX)).collect()
});

fn hash_with<S: BuildHasher>(b: &mut Bencher, builder: &S) {
    b.iter(|| {
        let mut acc = 0u64;
        for key in RANDOM_KEYS.iter() {
            let mut h = builder.build_hasher();
            key.hash(&mut h);
            acc ^= h.finish();
        }
        acc
    });
}

fn families(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_families");
    group.throughput(Throughput::Elements(TOTAL_KEYS));

    group.bench_with_input(BenchmarkId::new("pointer", "u64"), &(), |b, _| {
        hash_with(b, &PointerBuildHasher::default())
    });
    group.bench_with_input(BenchmarkId::new("int", "u64"), &(), |b, _| {
        hash_with(b, &IntBuildHasher::default())
    });
    group.bench_with_input(BenchmarkId::new("quad_polynomial", "u64"), &(), |b, _| {
        hash_with(b, &QuadBuildHasher::default())
    });
    group.bench_with_input(BenchmarkId::new("quad_murmur2a", "u64"), &(), |b, _| {
        hash_with(b, &QuadBuildHasher::murmur2a())
    });
    group.bench_with_input(BenchmarkId::new("pair", "u64"), &(), |b, _| {
        hash_with(b, &PairBuildHasher::default())
    });
    group.bench_with_input(BenchmarkId::new("cstr_on_bytes", "u64"), &(), |b, _| {
        hash_with(b, &CStrBuildHasher::default())
    });

    group.finish();
}

criterion_group!(benches, families);
criterion_main!(benches);
