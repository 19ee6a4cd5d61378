//! Benchmark for arena allocation throughput.
//!
//! Run with: cargo bench --package emberforge_core --bench arena_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emberforge_core::memory::ArenaAllocator;

fn benchmark_bump_alloc(c: &mut Criterion) {
    let mut arena = ArenaAllocator::new(1024 * 1024).expect("arena backing");

    c.bench_function("bump_alloc_1024x_u64", |b| {
        b.iter(|| {
            arena.reset();
            for _ in 0..1024 {
                let region = arena.alloc::<u64>(16).expect("within capacity");
                black_box(region.offset());
            }
        });
    });
}

fn benchmark_reset(c: &mut Criterion) {
    let mut arena = ArenaAllocator::new(1024 * 1024).expect("arena backing");

    c.bench_function("arena_reset", |b| {
        b.iter(|| {
            let _ = arena.alloc::<u64>(64);
            arena.reset();
            black_box(arena.used())
        });
    });
}

criterion_group!(benches, benchmark_bump_alloc, benchmark_reset);
criterion_main!(benches);
