use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;

use classic_ds::tree::{BinaryTree, RedBlackTree};

#[derive(Clone)]
enum TreeEnum<T: Ord> {
    Plain(BinaryTree<T>),
    RedBlack(RedBlackTree<T>),
}

impl<T: Ord> TreeEnum<T> {
    fn find(&self, v: &T) -> bool {
        match self {
            Self::Plain(t) => t.find(v),
            Self::RedBlack(t) => t.find(v),
        }
    }

    fn insert(&mut self, v: T) -> bool {
        match self {
            Self::Plain(t) => t.insert(v),
            Self::RedBlack(t) => t.insert(v),
        }
    }

    fn remove(&mut self, v: &T) -> bool {
        match self {
            Self::Plain(t) => t.remove(v),
            Self::RedBlack(t) => t.remove(v),
        }
    }
}

/// The values `0..num_nodes` in a fixed shuffled order.
fn shuffled(num_nodes: usize) -> Vec<i32> {
    let mut xs: Vec<i32> = (0..num_nodes as i32).collect();
    xs.shuffle(&mut rand::rngs::StdRng::seed_from_u64(0x5eed));
    xs
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes, both
/// insertion orders, and both kinds of tree before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        for (order, xs) in [
            ("ascending", (0..num_nodes as i32).collect::<Vec<_>>()),
            ("random", shuffled(num_nodes)),
        ] {
            let tree_tests = [
                (
                    "plain",
                    TreeEnum::Plain(xs.iter().copied().collect::<BinaryTree<_>>()),
                ),
                (
                    "red-black",
                    TreeEnum::RedBlack(xs.iter().copied().collect::<RedBlackTree<_>>()),
                ),
            ];
            for (kind, tree) in tree_tests {
                let id = BenchmarkId::new(format!("{}/{}", kind, order), num_nodes);

                group.bench_function(id, |b| {
                    b.iter_custom(|iters| {
                        let mut time = std::time::Duration::ZERO;
                        for _ in 0..iters {
                            let mut tree = black_box(tree.clone());
                            let instant = std::time::Instant::now();
                            f(&mut tree, black_box(largest_element_in_tree));
                            time += instant.elapsed();
                        }
                        time
                    })
                });
            }
        }
    }

    group.finish();
}

/// Builds whole trees from ascending and shuffled input.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_nodes in [100, 1_000, 4_000] {
        let ascending: Vec<i32> = (0..num_nodes).collect();
        let random = shuffled(num_nodes as usize);

        group.bench_with_input(
            BenchmarkId::new("plain/ascending", num_nodes),
            &ascending,
            |b, xs| b.iter(|| xs.iter().copied().collect::<BinaryTree<_>>()),
        );
        group.bench_with_input(
            BenchmarkId::new("red-black/ascending", num_nodes),
            &ascending,
            |b, xs| b.iter(|| xs.iter().copied().collect::<RedBlackTree<_>>()),
        );
        group.bench_with_input(
            BenchmarkId::new("plain/random", num_nodes),
            &random,
            |b, xs| b.iter(|| xs.iter().copied().collect::<BinaryTree<_>>()),
        );
        group.bench_with_input(
            BenchmarkId::new("red-black/random", num_nodes),
            &random,
            |b, xs| b.iter(|| xs.iter().copied().collect::<RedBlackTree<_>>()),
        );
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _found = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _found = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });
    bench_build(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
