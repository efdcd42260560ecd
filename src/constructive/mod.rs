//! Constructive heuristics for building route candidates.
//!
//! - [`SpanningTree`]: Capacity-bounded greedy spanning tree (Prim variant), O(n³)

mod spanning_tree;

pub use spanning_tree::{Preorder, SpanningTree, TreeNode};
