//! Benchmark for composable operations.
//!
//! Measures the cost of invoking sequenced operations built with `then`
//! and `of`, and of the failure-adaptation combinators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tandem::operation::Operation;

fn accumulate() -> Operation<(u64,)> {
    Operation::unary(|value: &u64| {
        black_box(value.wrapping_mul(31));
    })
}

// =============================================================================
// Sequencing Benchmarks
// =============================================================================

fn benchmark_sequencing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("operation_sequencing");

    for size in [1, 4, 16, 64] {
        let batch = Operation::of((0..size).map(|_| accumulate()));
        group.bench_with_input(BenchmarkId::new("of", size), &batch, |bencher, batch| {
            bencher.iter(|| {
                let Ok(()) = batch.invoke(black_box(&7));
            });
        });

        let chained = (1..size).fold(accumulate(), |operation, _| operation.then(accumulate()));
        group.bench_with_input(
            BenchmarkId::new("then_chain", size),
            &chained,
            |bencher, chained| {
                bencher.iter(|| {
                    let Ok(()) = chained.invoke(black_box(&7));
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Failure Adaptation Benchmarks
// =============================================================================

fn benchmark_failure_adaptation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("operation_failure");

    let failing = Operation::binary_fallible(|left: &u32, right: &u32| {
        if left > right {
            Err(left - right)
        } else {
            Ok(())
        }
    });

    let ignored = failing.clone().ignore_failure();
    group.bench_function("ignore_failure", |bencher| {
        bencher.iter(|| {
            let Ok(()) = ignored.invoke(black_box(&9), black_box(&3));
        });
    });

    let handled = failing.clone().handle_failure(|difference| {
        black_box(difference);
    });
    group.bench_function("handle_failure", |bencher| {
        bencher.iter(|| {
            let Ok(()) = handled.invoke(black_box(&9), black_box(&3));
        });
    });

    let recovered = failing.on_failure(Operation::binary(|left: &u32, right: &u32| {
        black_box(left + right);
    }));
    group.bench_function("on_failure", |bencher| {
        bencher.iter(|| {
            let Ok(()) = recovered.invoke(black_box(&9), black_box(&3));
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_sequencing, benchmark_failure_adaptation);
criterion_main!(benches);
