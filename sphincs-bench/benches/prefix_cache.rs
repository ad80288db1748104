//! SHA-2 Prefix Cache Benchmarks
//!
//! Compares F throughput when every call reuses one public seed (the memoized
//! block prefix is cloned) against alternating between two seeds (the prefix
//! is recompressed on every call).

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sphincs_thash::{Address, ParameterSet, Sha2Engine, TweakableHash};

fn bench_prefix_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-2 F prefix");
    group.throughput(Throughput::Elements(2));

    for set in [ParameterSet::L128f, ParameterSet::L256f] {
        let params = set.params(false).unwrap();
        let n = params.n();
        let seed_a = vec![0xAA; n];
        let seed_b = vec![0xBB; n];
        let m = vec![0x01; n];
        let adrs = Address::wots_hash(0, 1, 2, 3, 4);

        let mut eng = Sha2Engine::new(params).unwrap();
        group.bench_function(format!("{set} same seed"), |b| {
            b.iter(|| {
                black_box(eng.f(&seed_a, &adrs, black_box(&m)));
                black_box(eng.f(&seed_a, &adrs, black_box(&m)));
            })
        });

        let mut eng = Sha2Engine::new(params).unwrap();
        group.bench_function(format!("{set} alternating seeds"), |b| {
            b.iter(|| {
                black_box(eng.f(&seed_a, &adrs, black_box(&m)));
                black_box(eng.f(&seed_b, &adrs, black_box(&m)));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_reuse);

criterion_main!(benches);
