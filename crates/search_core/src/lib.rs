//! Search core for the strength tournament
//!
//! Two rated agents are compared by running a fixed-depth minimax search with
//! alpha-beta pruning over a synthetic tree whose leaves are scored by a noisy
//! strength difference. The search returns the explored tree, with pruned
//! branches recorded as stubs, so it can be inspected or rendered afterwards.

pub mod error;
pub mod evaluator;
pub mod node;
pub mod search;

pub use error::{Result, SearchError};
pub use evaluator::*;
pub use node::*;
pub use search::*;
