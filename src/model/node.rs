//! Node type for phylogenetic tree representation.

use crate::style::NodeStyle;
use std::ops::Deref;

/// Index of a node in a [Tree](crate::model::Tree) arena.
pub type NodeId = usize;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A single clade or leaf in a phylogenetic tree.
///
/// Unlike strictly binary tree models, a node may have any number of ordered
/// children, and labels and distances may appear on leaves *and* internal
/// nodes (Newick permits both). A node is a leaf iff it has no children.
///
/// # Invariants
/// - `index` is this node's position in the tree arena
/// - `parent` is `None` only for the root
/// - `children` preserves insertion order, which reflects textual order in
///   the parsed Newick string
/// - `distance` (distance to parent) is non-negative if present; absence is
///   meaningful and distinct from `0.0`
///
/// # Mutability
/// The structural fields are fixed once parsing completes. Only the
/// cosmetic [`style`](Node::style) attributes are mutated afterwards, by
/// style rules and by [`upmerge_linestyle`](crate::model::Tree::upmerge_linestyle).
#[derive(Debug, Clone)]
pub struct Node {
    index: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    label: Option<String>,
    distance: Option<Distance>,
    bootstrap: Option<u32>,

    /// Cosmetic attributes consumed by the layout engine.
    pub style: NodeStyle,
}

impl Node {
    /// Creates a new node with no label, distance, or children.
    ///
    /// # Arguments
    /// * `index` - The node's position in the tree arena
    /// * `parent` - Index of the parent node, or `None` for the root
    pub fn new(index: NodeId, parent: Option<NodeId>) -> Self {
        Node {
            index,
            parent,
            children: Vec::new(),
            label: None,
            distance: None,
            bootstrap: None,
            style: NodeStyle::default(),
        }
    }

    /// Returns the index of this node in the tree arena.
    pub fn index(&self) -> NodeId {
        self.index
    }

    /// Returns the index of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the indices of this node's children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the label, or `None` if the node is unlabeled.
    ///
    /// An empty label in the source text parses as `None`, never as `""`.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the distance to the parent, or `None` if none was recorded.
    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    /// Returns the bootstrap/support value, or `None` if none was recorded.
    pub fn bootstrap(&self) -> Option<u32> {
        self.bootstrap
    }

    /// Sets or clears the label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Sets or clears the distance to the parent.
    pub fn set_distance(&mut self, distance: Option<Distance>) {
        self.distance = distance;
    }

    /// Sets or clears the bootstrap/support value.
    pub fn set_bootstrap(&mut self, bootstrap: Option<u32>) {
        self.bootstrap = bootstrap;
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

// =#========================================================================#=
// DISTANCE
// =#========================================================================#=
/// Distance from a node to its parent (branch length), enforced non-negative.
///
/// The value is guaranteed to be non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(f64);

impl Distance {
    /// Creates a new distance.
    ///
    /// # Arguments
    /// * `value` - The distance value (must be non-negative and finite)
    ///
    /// # Panics
    /// Panics if `value` is negative or not finite. The Newick parser
    /// validates values before constructing a `Distance`, reporting a
    /// [FormatError](crate::newick::FormatError) instead of panicking.
    pub fn new(value: f64) -> Self {
        assert!(value >= 0.0, "distance must be non-negative, got {}", value);
        assert!(value.is_finite(), "distance must be finite, got {}", value);
        Distance(value)
    }
}

impl Deref for Distance {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}
