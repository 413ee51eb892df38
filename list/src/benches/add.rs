use criterion::{criterion_group, BatchSize, Criterion};
use primer_list::LinkedList;
use std::hint::black_box;

/// Lengths of the list before the measured append. Append is constant-time, so
/// every size should report roughly the same latency.
const SIZES: [usize; 4] = [0, 1_000, 100_000, 1_000_000];

fn bench_add(c: &mut Criterion) {
    for size in SIZES {
        c.bench_function(&format!("{}/len={}", module_path!(), size), |b| {
            b.iter_batched(
                || {
                    let mut list = LinkedList::with_capacity(size + 1);
                    list.extend(0..size as u64);
                    list
                },
                |mut list| {
                    list.add(black_box(size as u64));
                    list
                },
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_add
}
