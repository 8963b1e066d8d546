//! Property tests comparing alpha-beta against exhaustive minimax
//!
//! Leaf tables are generated from seeded RNGs so failures are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use search_core::{
    search, AlphaBetaSearch, LeafEvaluator, NoisyEvaluator, Role, SearchError, SearchNode, BRANCH,
    FULL_LEAF_COUNT, MAX_DEPTH,
};

struct TableEvaluator<'a> {
    values: &'a [f64],
}

impl LeafEvaluator for TableEvaluator<'_> {
    fn evaluate(&mut self, leaf: usize, _max: f64, _min: f64) -> search_core::Result<f64> {
        Ok(self.values[leaf])
    }
}

/// Plain minimax over every leaf, no pruning.
fn exhaustive(values: &[f64], depth: u8, role: Role, ordinal: usize) -> f64 {
    if depth == MAX_DEPTH {
        return values[ordinal];
    }
    let children =
        (0..BRANCH).map(|i| exhaustive(values, depth + 1, role.flip(), ordinal * BRANCH + i));
    match role {
        Role::Maximizer => children.fold(f64::NEG_INFINITY, f64::max),
        Role::Minimizer => children.fold(f64::INFINITY, f64::min),
    }
}

fn random_table(rng: &mut StdRng, coarse: bool) -> Vec<f64> {
    (0..FULL_LEAF_COUNT)
        .map(|_| {
            if coarse {
                // Few distinct values to force plenty of ties
                rng.gen_range(0..4) as f64
            } else {
                rng.gen_range(-5.0..5.0)
            }
        })
        .collect()
}

fn assert_tree_shape(node: &SearchNode) {
    if node.pruned {
        assert!(node.value.is_none(), "pruned node carries a value");
        assert!(node.children.is_empty(), "pruned node has children");
        return;
    }

    let value = node.value.expect("explored node without a value");

    if node.depth == MAX_DEPTH {
        assert!(node.children.is_empty(), "leaf with children");
        return;
    }

    assert_eq!(node.children.len(), BRANCH);
    assert!(!node.children[0].pruned, "first child must be explored");

    let explored: Vec<f64> = node
        .children
        .iter()
        .filter(|c| !c.pruned)
        .map(|c| c.value.expect("explored child without a value"))
        .collect();
    let expected = match node.role {
        Role::Maximizer => explored.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Role::Minimizer => explored.iter().copied().fold(f64::INFINITY, f64::min),
    };
    assert_eq!(value, expected);

    let best = node.best_child.expect("internal node without best child");
    assert_eq!(node.children[best].value, Some(value));
    // Ties resolve to the leftmost explored child
    assert!(node.children[..best]
        .iter()
        .all(|c| c.value != Some(value)));

    for child in &node.children {
        assert_eq!(child.depth, node.depth + 1);
        assert_eq!(child.role, node.role.flip());
        assert_tree_shape(child);
    }
}

#[test]
fn test_alpha_beta_matches_exhaustive_minimax() {
    let search = AlphaBetaSearch::new();

    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = random_table(&mut rng, seed % 2 == 0);

        let outcome = search
            .search(0.0, 0.0, &mut TableEvaluator { values: &table })
            .unwrap();
        let expected = exhaustive(&table, 0, Role::Maximizer, 0);

        assert_eq!(outcome.utility, expected, "seed {}", seed);
        assert_tree_shape(&outcome.root);
    }
}

#[test]
fn test_pruning_never_evaluates_more_than_full_tree() {
    let search = AlphaBetaSearch::new();
    let mut total_pruned = 0;

    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = random_table(&mut rng, false);
        let outcome = search
            .search(0.0, 0.0, &mut TableEvaluator { values: &table })
            .unwrap();

        assert!(outcome.stats.leaves_evaluated <= FULL_LEAF_COUNT as u64);
        assert_eq!(outcome.root.pruned_count() as u64, outcome.stats.pruned_stubs);
        total_pruned += outcome.stats.pruned_stubs;
    }

    assert!(total_pruned > 0, "random tables should trigger some cutoffs");
}

#[test]
fn test_noisy_search_produces_well_formed_trees() {
    let search = AlphaBetaSearch::new();

    for seed in 0..50u64 {
        let mut evaluator = NoisyEvaluator::seeded(seed);
        let outcome = search.search(20.0, 10.0, &mut evaluator).unwrap();

        assert_eq!(outcome.root.depth, 0);
        assert_eq!(outcome.root.role, Role::Maximizer);
        assert_tree_shape(&outcome.root);

        for node in outcome.root.iter().filter(|n| n.is_leaf()) {
            assert_eq!(node.depth, MAX_DEPTH);
        }
    }
}

#[test]
fn test_unvalidated_ratings_are_rejected_by_search() {
    for (max_rating, min_rating) in [
        (f64::INFINITY, f64::INFINITY),
        (f64::NAN, 3.0),
        (4.0, -1.0),
    ] {
        assert!(matches!(
            search(max_rating, min_rating),
            Err(SearchError::Domain { .. })
        ));
    }
}
