use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

use classic_ds::graph::{AdjacencyList, Oriented, Orientation, Unoriented};
use classic_ds::list::SingleList;
use classic_ds::set::Set;
use classic_ds::tree::{RedBlack, Unbalanced};

/// Adds every edge of a complete graph (with self-loops) on `n` vertices.
fn clique<O: Orientation>(n: usize, oriented: bool) -> AdjacencyList<O> {
    let mut graph = AdjacencyList::new(n);
    for i in 0..n {
        let lowest = if oriented { 0 } else { i };
        for j in (lowest..n).rev() {
            assert_eq!(graph.add_edge(i, j), Ok(true));
        }
    }
    graph
}

fn bench_clique(c: &mut Criterion) {
    let mut group = c.benchmark_group("clique");
    group.sample_size(10);

    for n in [100, 200, 400] {
        group.bench_function(BenchmarkId::new("unoriented", n), |b| {
            b.iter(|| black_box(clique::<Unoriented>(n, false).edges()))
        });
        group.bench_function(BenchmarkId::new("oriented", n), |b| {
            b.iter(|| black_box(clique::<Oriented>(n, true).edges()))
        });
    }

    group.finish();
}

fn bench_set_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("set-insert");

    for n in [1_000, 4_000] {
        group.bench_function(BenchmarkId::new("red-black", n), |b| {
            b.iter(|| (0..n).collect::<Set<i32, RedBlack>>())
        });
        group.bench_function(BenchmarkId::new("plain", n), |b| {
            b.iter(|| (0..n).collect::<Set<i32, Unbalanced>>())
        });
    }

    group.finish();
}

fn bench_list_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("list-sort");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);

    for n in [1_000, 10_000, 100_000] {
        let list: SingleList<i32> = (0..n).map(|_| rng.gen()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| list.sorted())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clique, bench_set_insert, bench_list_sort);
criterion_main!(benches);
