use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};
use sha3::{Digest, Sha3_256, Sha3_512};

use keccak1600::{
    sha3_256_with, sha3_512_with, Compact, EarlyParity, InPlaceUnrolled, IntermediateUnrolled,
    LaneComplementing, Permutation, Reference, State, Strategy,
};

const INPUT: usize = 100 * 1024;

fn sha3_256_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3-256");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));

    for strategy in Strategy::ALL {
        g.bench_with_input(format!("{strategy:?}"), &[0u8; INPUT], |b, block| {
            b.iter(|| sha3_256_with(strategy, block))
        });
    }
    g.bench_with_input("RustCrypto", &[0u8; INPUT], |b, block| {
        b.iter(|| {
            let mut digest = Sha3_256::default();
            digest.update(block);
            digest.finalize()
        })
    });
    g.finish();
}

fn sha3_512_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3-512");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));

    for strategy in Strategy::ALL {
        g.bench_with_input(format!("{strategy:?}"), &[0u8; INPUT], |b, block| {
            b.iter(|| sha3_512_with(strategy, block))
        });
    }
    g.bench_with_input("RustCrypto", &[0u8; INPUT], |b, block| {
        b.iter(|| {
            let mut digest = Sha3_512::default();
            digest.update(block);
            digest.finalize()
        })
    });
    g.finish();
}

fn permutation_benchmarks(c: &mut Criterion) {
    fn bench<P: Permutation>(g: &mut BenchmarkGroup<'_, WallTime>, name: &str) {
        g.bench_function(name, |b| {
            let mut state = State::new();
            b.iter(|| state.permute::<P>())
        });
    }

    let mut g = c.benchmark_group("permutation");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(200));
    bench::<Reference>(&mut g, "Reference");
    bench::<Compact>(&mut g, "Compact");
    bench::<InPlaceUnrolled>(&mut g, "InPlaceUnrolled");
    bench::<IntermediateUnrolled>(&mut g, "IntermediateUnrolled");
    bench::<EarlyParity>(&mut g, "EarlyParity");
    bench::<LaneComplementing>(&mut g, "LaneComplementing");
    g.finish();
}

criterion_group!(
    benches,
    sha3_256_benchmarks,
    sha3_512_benchmarks,
    permutation_benchmarks
);
criterion_main!(benches);
