//! Explicit search tree produced by the alpha-beta search
//!
//! Every node is owned by its parent, so a tree is dropped together with its
//! root. Renderers only need `value`, `depth`, `role`, `pruned` and the
//! ordered `children`; positions on screen are not tracked here.

use serde::{Deserialize, Serialize};

/// Whose turn a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    /// The opponent's role.
    pub fn flip(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// True if `candidate` should replace `incumbent` for this role.
    /// Ties keep the incumbent.
    pub fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Role::Maximizer => candidate > incumbent,
            Role::Minimizer => candidate < incumbent,
        }
    }
}

/// One explored or pruned position in the search tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNode {
    /// Utility at this node. `None` only for pruned stubs.
    pub value: Option<f64>,
    /// Ply from the root (root = 0)
    pub depth: u8,
    pub role: Role,
    /// True if this subtree was skipped by a cutoff
    pub pruned: bool,
    /// Index into `children` of the child whose value this node adopted
    pub best_child: Option<usize>,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    /// A terminal node with an evaluated utility.
    pub fn leaf(depth: u8, role: Role, value: f64) -> Self {
        Self {
            value: Some(value),
            depth,
            role,
            pruned: false,
            best_child: None,
            children: Vec::new(),
        }
    }

    /// Placeholder for a subtree that was never explored.
    pub fn pruned_stub(depth: u8, role: Role) -> Self {
        Self {
            value: None,
            depth,
            role,
            pruned: true,
            best_child: None,
            children: Vec::new(),
        }
    }

    /// A resolved internal node.
    pub fn internal(
        depth: u8,
        role: Role,
        value: f64,
        best_child: usize,
        children: Vec<SearchNode>,
    ) -> Self {
        Self {
            value: Some(value),
            depth,
            role,
            pruned: false,
            best_child: Some(best_child),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.pruned && self.children.is_empty()
    }

    /// The child this node's value was taken from.
    pub fn best(&self) -> Option<&SearchNode> {
        self.best_child.and_then(|i| self.children.get(i))
    }

    /// Depth-first, pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Total number of nodes, stubs included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of evaluated leaves.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of pruned stubs.
    pub fn pruned_count(&self) -> usize {
        self.iter().filter(|n| n.pruned).count()
    }

    /// Follows `best_child` links from this node down to a leaf.
    pub fn principal_line(&self) -> Vec<&SearchNode> {
        let mut line = vec![self];
        let mut current = self;
        while let Some(next) = current.best() {
            line.push(next);
            current = next;
        }
        line
    }
}

/// Iterator returned by [`SearchNode::iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a SearchNode>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the leftmost child is visited first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
