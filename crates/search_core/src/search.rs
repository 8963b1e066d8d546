//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The search builds the full explored/pruned tree as it goes: every call
//! returns an owned subtree together with its value, and a cutoff leaves a
//! pruned stub in place of every sibling it skipped.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::evaluator::{LeafEvaluator, NoisyEvaluator};
use crate::node::{Role, SearchNode};

/// Depth at which nodes are evaluated
pub const MAX_DEPTH: u8 = 5;

/// Children per internal node
pub const BRANCH: usize = 2;

/// Leaves in the full, unpruned tree
pub const FULL_LEAF_COUNT: usize = BRANCH.pow(MAX_DEPTH as u32);

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Leaves whose utility was computed
    pub leaves_evaluated: u64,
    /// Cutoffs that skipped at least one child
    pub cutoffs: u64,
    /// Pruned stubs attached to the tree
    pub pruned_stubs: u64,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Fully materialized root (depth 0, maximizer)
    pub root: SearchNode,
    /// Value backed up to the root
    pub utility: f64,
    pub stats: SearchStats,
}

/// Minimax searcher over a synthetic tree of uniform shape.
///
/// Production searches always use `MAX_DEPTH` and `BRANCH`; smaller shapes
/// exist only for unit tests.
#[derive(Debug, Clone)]
pub struct AlphaBetaSearch {
    max_depth: u8,
    branching: usize,
}

impl Default for AlphaBetaSearch {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            branching: BRANCH,
        }
    }
}

/// Per-search state threaded through the recursion.
struct SearchContext<'a, E: LeafEvaluator + ?Sized> {
    evaluator: &'a mut E,
    max_rating: f64,
    min_rating: f64,
    stats: SearchStats,
}

impl AlphaBetaSearch {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_shape(max_depth: u8, branching: usize) -> Self {
        assert!(max_depth > 0 && branching > 0);
        Self {
            max_depth,
            branching,
        }
    }

    /// Searches a tree where the side rated `max_rating` moves first and
    /// maximizes, and the side rated `min_rating` minimizes.
    ///
    /// Evaluator errors abort the search and are returned unchanged.
    pub fn search<E: LeafEvaluator + ?Sized>(
        &self,
        max_rating: f64,
        min_rating: f64,
        evaluator: &mut E,
    ) -> Result<SearchOutcome> {
        let mut ctx = SearchContext {
            evaluator,
            max_rating,
            min_rating,
            stats: SearchStats::default(),
        };

        let (root, utility) = self.minimax(
            &mut ctx,
            0,
            Role::Maximizer,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
        )?;

        debug!(
            max_rating,
            min_rating,
            utility,
            leaves = ctx.stats.leaves_evaluated,
            cutoffs = ctx.stats.cutoffs,
            "search complete"
        );

        Ok(SearchOutcome {
            root,
            utility,
            stats: ctx.stats,
        })
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `ordinal` is the node's left-to-right index among nodes of its depth,
    /// which for leaves becomes the leaf ordinal handed to the evaluator.
    fn minimax<E: LeafEvaluator + ?Sized>(
        &self,
        ctx: &mut SearchContext<'_, E>,
        depth: u8,
        role: Role,
        mut alpha: f64,
        mut beta: f64,
        ordinal: usize,
    ) -> Result<(SearchNode, f64)> {
        if depth == self.max_depth {
            let value = ctx
                .evaluator
                .evaluate(ordinal, ctx.max_rating, ctx.min_rating)?;
            ctx.stats.leaves_evaluated += 1;
            return Ok((SearchNode::leaf(depth, role, value), value));
        }

        let branching = self.branching;
        let mut children = Vec::with_capacity(branching);
        let mut best_index = 0;
        let mut best_value = match role {
            Role::Maximizer => f64::NEG_INFINITY,
            Role::Minimizer => f64::INFINITY,
        };

        for i in 0..branching {
            let (child, value) = self.minimax(
                ctx,
                depth + 1,
                role.flip(),
                alpha,
                beta,
                ordinal * branching + i,
            )?;
            children.push(child);

            // Ties keep the earlier child
            if i == 0 || role.prefers(value, best_value) {
                best_index = i;
                best_value = value;
            }

            match role {
                Role::Maximizer => alpha = alpha.max(best_value),
                Role::Minimizer => beta = beta.min(best_value),
            }

            if beta <= alpha {
                // A cutoff on the last child skips nothing
                let skipped = branching - i - 1;
                if skipped > 0 {
                    children.extend(
                        (0..skipped).map(|_| SearchNode::pruned_stub(depth + 1, role.flip())),
                    );
                    ctx.stats.cutoffs += 1;
                    ctx.stats.pruned_stubs += skipped as u64;
                    trace!(depth, alpha, beta, skipped, "cutoff");
                }
                break;
            }
        }

        Ok((
            SearchNode::internal(depth, role, best_value, best_index, children),
            best_value,
        ))
    }
}

/// Runs a default-shaped search using the process-wide noise source.
pub fn search(max_rating: f64, min_rating: f64) -> Result<SearchOutcome> {
    AlphaBetaSearch::default().search(max_rating, min_rating, &mut NoisyEvaluator::thread())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
