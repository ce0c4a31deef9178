//! Performance benchmarks for bfwalk

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use bfwalk::test_utils::{TestTree, generate_tree};
use bfwalk::{MemStorage, OsStorage, Order, Signal, StorageError};

fn count_entries<S>(storage: &S, order: Order) -> usize
where
    S: bfwalk::Storage<Error = StorageError>,
{
    let mut visited = 0;
    order
        .walk(storage, "data", |_, _, err| {
            if let Some(err) = err {
                return Signal::Fail(err);
            }
            visited += 1;
            Signal::Continue
        })
        .unwrap();
    visited
}

fn bench_mem_walk(c: &mut Criterion) {
    let trees: [(&str, MemStorage); 2] = [
        ("small", generate_tree("data", 3, 2)),
        ("large", generate_tree("data", 100, 5)),
    ];

    let mut group = c.benchmark_group("mem_walk");
    for (name, storage) in &trees {
        for (label, order) in [
            ("depth_first", Order::DepthFirst),
            ("breadth_first", Order::BreadthFirst),
        ] {
            group.bench_with_input(BenchmarkId::new(label, name), storage, |b, storage| {
                b.iter(|| count_entries(black_box(storage), order))
            });
        }
    }
    group.finish();
}

fn bench_os_walk(c: &mut Criterion) {
    let tree = TestTree::new();
    for i in 0..20 {
        for d in 0..3 {
            let dir = (0..=d)
                .map(|level| format!("dir{}_{}", i, level))
                .collect::<Vec<_>>()
                .join("/");
            for f in 0..10 {
                tree.add_file(&format!("data/{}/file{}.rs", dir, f), "");
            }
        }
    }
    let storage = OsStorage::new(tree.path());

    let mut group = c.benchmark_group("os_walk");
    group.bench_function("depth_first", |b| {
        b.iter(|| count_entries(black_box(&storage), Order::DepthFirst))
    });
    group.bench_function("breadth_first", |b| {
        b.iter(|| count_entries(black_box(&storage), Order::BreadthFirst))
    });
    group.finish();
}

criterion_group!(benches, bench_mem_walk, bench_os_walk);
criterion_main!(benches);
