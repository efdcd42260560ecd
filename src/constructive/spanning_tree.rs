//! Capacity-bounded greedy spanning tree.
//!
//! A variant of Prim's algorithm: starting from a root stop, repeatedly
//! attach the remaining stop with the cheapest edge from any node already in
//! the tree, until every stop is attached or the next one would push the
//! accumulated package count over the vehicle payload.
//!
//! # Tie-breaking
//!
//! Tree nodes are scanned in stack preorder (push root; pop a node; push its
//! children in attachment order). The first node in that order holding the
//! minimum edge wins, and among its candidates the first in ascending index
//! order wins. Flattening uses the same preorder, so the route order depends
//! on it too.
//!
//! # Complexity
//!
//! O(n³) in the number of stops: n growth steps, each scanning up to n tree
//! nodes against up to n candidates.

use std::collections::BTreeSet;

use tracing::trace;

use crate::distance::TravelMatrix;

/// A node in a [`SpanningTree`]: a matrix location and its child node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    location: usize,
    children: Vec<usize>,
}

impl TreeNode {
    /// Matrix index of this node's location.
    pub fn location(&self) -> usize {
        self.location
    }

    /// Child node ids in attachment order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// A rooted, ordered tree of matrix locations stored as an arena.
///
/// Node id 0 is always the root.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use delivery_routing::models::{Location, Trip};
/// use delivery_routing::distance::TravelMatrix;
/// use delivery_routing::constructive::SpanningTree;
///
/// let stops = [
///     Location::delivery("", "A", 10),
///     Location::delivery("", "B", 10),
///     Location::delivery("", "C", 10),
/// ];
/// let mut trips = Vec::new();
/// for a in &stops {
///     for b in &stops {
///         if a != b {
///             trips.push(Trip::new(a.clone(), b.clone(), 1).unwrap());
///         }
///     }
/// }
/// let matrix = TravelMatrix::new(trips);
/// let all: BTreeSet<usize> = (0..3).collect();
///
/// let tree = SpanningTree::build(&matrix, 0, &all, 25);
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.tour(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    nodes: Vec<TreeNode>,
}

impl SpanningTree {
    /// Creates a tree holding only `root`.
    pub fn new(root: usize) -> Self {
        Self {
            nodes: vec![TreeNode {
                location: root,
                children: Vec::new(),
            }],
        }
    }

    /// Grows a capacity-bounded tree rooted at `root` over `stops`.
    ///
    /// The root's own demand counts toward `max_payload` but never prevents
    /// the root from being placed. Growth stops at the first stop that would
    /// exceed the payload; that stop is not attached.
    ///
    /// # Panics
    ///
    /// Panics if `root` or any index in `stops` is out of bounds for `matrix`.
    pub fn build(
        matrix: &TravelMatrix,
        root: usize,
        stops: &BTreeSet<usize>,
        max_payload: u32,
    ) -> Self {
        let mut tree = Self::new(root);
        let mut remaining: Vec<usize> = stops.iter().copied().filter(|&s| s != root).collect();
        let mut packages = matrix.total_packages(&[root]);
        let max_payload = u64::from(max_payload);

        while !remaining.is_empty() {
            let mut best: Option<(usize, usize, u64)> = None;
            for node in tree.preorder() {
                let from = tree.nodes[node].location;
                if let Some((dst, t)) = matrix.nearest_neighbor(from, &remaining) {
                    if best.map_or(true, |(_, _, best_t)| t < best_t) {
                        best = Some((node, dst, t));
                    }
                }
            }

            let Some((parent, next, t)) = best else {
                break;
            };

            packages += matrix.total_packages(&[next]);
            if packages > max_payload {
                trace!(root, next, packages, max_payload, "payload reached");
                break;
            }

            trace!(root, parent = tree.nodes[parent].location, next, t, "attach stop");
            tree.attach(parent, next);
            remaining.retain(|&s| s != next);
        }

        tree
    }

    /// Adds `location` as the last child of node `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node id of this tree.
    pub fn attach(&mut self, parent: usize, location: usize) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            location,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Node by id.
    pub fn node(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in stack preorder.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![0],
        }
    }

    /// Locations in stack preorder, root first.
    pub fn tour(&self) -> Vec<usize> {
        self.preorder().map(|id| self.nodes[id].location).collect()
    }
}

/// Stack-based preorder over a [`SpanningTree`].
///
/// Children are pushed in attachment order, so the last attached child is
/// visited first.
pub struct Preorder<'a> {
    tree: &'a SpanningTree,
    stack: Vec<usize>,
}

impl Iterator for Preorder<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let id = self.stack.pop()?;
        self.stack.extend_from_slice(&self.tree.nodes[id].children);
        Some(id)
    }
}
