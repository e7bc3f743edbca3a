use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maybe::{Maybe, RawPointer};
use pprof::criterion::{Output, PProfProfiler};
use std::hint::black_box;

fn bench_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chained transformations");

    for depth in [1usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("Option::and_then", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut acc = Some(black_box(1u64));
                    for _ in 0..depth {
                        acc = acc.and_then(|x| x.checked_add(1));
                    }
                    acc
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Maybe::and_then boxed", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut acc = Maybe::new(Box::new(black_box(1u64)));
                    for _ in 0..depth {
                        acc = acc.and_then(|x| Box::new(x + 1));
                    }
                    acc.get().copied()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Maybe::and_then lifted", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut acc = Maybe::some(black_box(1u64));
                    for _ in 0..depth {
                        acc = acc.and_then(|x| x + 1);
                    }
                    acc.get().copied()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Maybe::and_then absent", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut acc = Maybe::new(black_box(RawPointer::<u64>::null()));
                    for _ in 0..depth {
                        acc = acc.and_then(|x| Box::new(x + 1));
                    }
                    acc.is_present()
                })
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_chain
}
criterion_main!(benches);
