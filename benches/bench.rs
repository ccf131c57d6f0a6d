use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Pushes a midpoint-first insertion order for `lo..=hi` so that inserting
/// the values in that order builds a perfectly balanced tree. Without this
/// the unbalanced tree would degrade to a spine on sorted input.
fn balanced_order(lo: i32, hi: i32, out: &mut Vec<i32>) {
    if lo > hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    out.push(mid);
    balanced_order(lo, mid - 1, out);
    balanced_order(mid + 1, hi, out);
}

fn perfect_tree(num_levels: u32) -> Tree<i32> {
    let num_nodes = 2i32.pow(num_levels) - 1;
    let mut order = Vec::with_capacity(num_nodes as usize);
    balanced_order(0, num_nodes - 1, &mut order);

    let mut tree = Tree::new();
    for v in order {
        tree.insert(v);
    }
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = 2i32.pow(num_levels) - 2;
        let tree = perfect_tree(num_levels);

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
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

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _found = black_box(tree.find(&i));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _found = black_box(tree.find(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "insert-duplicate", |tree, i| {
        tree.insert(i);
    });

    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });

    bench_helper(c, "min-value-scan", |tree, _| {
        let _min = black_box(tree.min_value());
    });
    bench_helper(c, "min-value-left-spine", |tree, _| {
        let _min = black_box(tree.min_value_of_bst());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
