use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::tree::{SearchMode, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a freshly balanced tree holding `0..n` for a full tree of the
/// given number of levels.
fn balanced_tree(num_levels: usize) -> Tree<i32> {
    let values = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    Tree::from_values(values)
}

/// Measures finding the largest element, which the exhaustive walk reaches
/// last and the pruned descent reaches in `O(height)`.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for num_levels in [3, 7, 11, 15] {
        let largest = num_nodes_in_full_tree(num_levels) as i32 - 1;

        for mode in [SearchMode::Exhaustive, SearchMode::Pruned] {
            let mut tree = balanced_tree(num_levels);
            tree.set_search_mode(mode);

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), num_levels),
                &largest,
                |b, largest| b.iter(|| tree.find(black_box(largest))),
            );
        }
    }

    group.finish();
}

/// Measures rebuilding a fully skewed tree into a balanced one.
fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");

    for num_levels in [3, 7, 11] {
        let mut tree = Tree::new();
        for x in 0..num_nodes_in_full_tree(num_levels) as i32 {
            tree.insert(x);
        }

        group.bench_with_input(BenchmarkId::from_parameter(num_levels), &tree, |b, tree| {
            b.iter(|| tree.rebalance())
        });
    }

    group.finish();
}

/// Measures balanced construction from unsorted input, including the sort.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_values");

    for num_levels in [3, 7, 11, 15] {
        // Reversed input so the sort has actual work to do.
        let values = (0..num_nodes_in_full_tree(num_levels) as i32)
            .rev()
            .collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_levels),
            &values,
            |b, values| b.iter(|| Tree::from_values(values.clone())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find, bench_rebalance, bench_construction);
criterion_main!(benches);
