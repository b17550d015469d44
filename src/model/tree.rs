//! Tree structure for phylogenetic tree representation.
//!
//! This module provides the core data structure for rooted, ordered,
//! multi-child phylogenetic trees:
//! - `Tree`: arena of [Node]s addressed by [NodeId].
//! - Traversal iterators ([PreOrderIter], [Leaves]).
//! - Derived queries used by the layout engine (height, distance height,
//!   smallest enclosing clade, line-style upmerging).

use crate::model::node::{Node, NodeId};

/// *During construction only*, index for unset root.
const NO_ROOT_SET: NodeId = usize::MAX;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A rooted, ordered phylogenetic tree using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeId].
/// Parent links are plain indices, so there is no ownership cycle: the
/// parent-to-child direction is the only owning one.
///
/// # Structure
/// - All nodes (root, internal, and leaves) live in the arena
/// - The first node added with no parent becomes the root
/// - Child order is significant and preserved (it is the semantic x-axis of
///   both layout modes)
///
/// # Lifecycle
/// A tree is built once by the Newick parser from a complete text buffer and
/// is structurally immutable afterwards; only per-node cosmetic style
/// attributes change, and the whole tree is discarded after one render.
///
/// # Example
/// ```
/// use cladograph::model::Tree;
///
/// // Build (A,B)R by hand; the Newick parser does the same thing.
/// let mut tree = Tree::new();
/// let root = tree.add_node(None);
/// tree[root].set_label(Some("R".to_string()));
/// let a = tree.add_node(Some(root));
/// tree[a].set_label(Some("A".to_string()));
/// let b = tree.add_node(Some(root));
/// tree[b].set_label(Some("B".to_string()));
///
/// assert_eq!(tree.num_leaves(), 2);
/// assert_eq!(tree.height(root), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Index of the root of this tree
    root_index: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

// ============================================================================
// Construction and accessors (pub)
// ============================================================================
impl Tree {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root_index: NO_ROOT_SET,
        }
    }

    /// Adds a node to the tree, assigning a unique index, which gets returned.
    ///
    /// The new node is appended to `parent`'s children; a node added with no
    /// parent becomes the root.
    ///
    /// # Panics
    /// Panics if `parent` is `None` but a root already exists, or if `parent`
    /// is out of bounds.
    pub fn add_node(&mut self, parent: Option<NodeId>) -> NodeId {
        let index = self.nodes.len();
        match parent {
            Some(parent_index) => {
                self.nodes[parent_index].push_child(index);
            }
            None => {
                assert!(self.root_index == NO_ROOT_SET, "tree already has a root");
                self.root_index = index;
            }
        }
        self.nodes.push(Node::new(index, parent));
        index
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the index of the root node.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn root_id(&self) -> NodeId {
        assert!(self.root_index != NO_ROOT_SET, "tree has no root");
        self.root_index
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root_id()]
    }
}

impl std::ops::Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// ============================================================================
// Traversal (pub)
// ============================================================================
impl Tree {
    /// Returns an iterator over all nodes in pre-order (self before children,
    /// children left to right).
    pub fn iter(&self) -> PreOrderIter<'_> {
        let start = if self.is_empty() { None } else { Some(self.root_index) };
        PreOrderIter::new(self, start)
    }

    /// Returns an iterator over all leaves of the tree, in left-to-right
    /// (textual) order.
    pub fn leaves(&self) -> Leaves<'_> {
        let start = if self.is_empty() { None } else { Some(self.root_index) };
        Leaves::new(self, start)
    }

    /// Returns an iterator over the leaves under `id` (or `id` itself if it
    /// is a leaf), in left-to-right order.
    pub fn leaves_of(&self, id: NodeId) -> Leaves<'_> {
        Leaves::new(self, Some(id))
    }
}

// ============================================================================
// Derived queries (pub)
// ============================================================================
impl Tree {
    /// Returns the height of the subtree rooted at `id`, counted in edges:
    /// 0 for a leaf, otherwise one more than the tallest child.
    pub fn height(&self, id: NodeId) -> usize {
        self[id]
            .children()
            .iter()
            .map(|&child| self.height(child) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the maximum accumulated distance from `id` down to a leaf,
    /// including `id`'s own distance to its parent.
    ///
    /// Returns `None` as soon as any node in the subtree lacks a recorded
    /// distance, with one exception: the root's own missing distance counts
    /// as 0. Layout uses this as the single predicate for whether branch
    /// lengths are honored, falling back to the unweighted
    /// [height](Tree::height) otherwise.
    pub fn distance_height(&self, id: NodeId) -> Option<f64> {
        let node = &self[id];
        let own = match node.distance() {
            Some(distance) => *distance,
            None if id == self.root_index => 0.0,
            None => return None,
        };

        if node.is_leaf() {
            return Some(own);
        }

        let mut tallest = f64::MIN;
        for &child in node.children() {
            tallest = tallest.max(self.distance_height(child)?);
        }
        Some(own + tallest)
    }

    /// Returns the lowest node whose leaf set is exactly the set of leaves
    /// satisfying `predicate`, i.e. the smallest enclosing clade.
    ///
    /// Returns `None` if no leaf satisfies the predicate or the tree is
    /// empty.
    pub fn find_common_parent_of<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        if self.is_empty() {
            return None;
        }

        let total = self.count_leaves_satisfying(self.root_index, &predicate);
        if total == 0 {
            return None;
        }

        // Descend as long as a single child still contains every satisfying
        // leaf; stop at the first node where they spread across children.
        let mut current = self.root_index;
        loop {
            if self[current].is_leaf() {
                return Some(current);
            }

            let mut next = None;
            for &child in self[current].children() {
                let sub = self.count_leaves_satisfying(child, &predicate);
                if sub == total {
                    next = Some(child);
                    break;
                }
                if sub > 0 {
                    return Some(current);
                }
            }

            match next {
                Some(child) => current = child,
                None => return Some(current),
            }
        }
    }

    fn count_leaves_satisfying<F>(&self, id: NodeId, predicate: &F) -> usize
    where
        F: Fn(&Node) -> bool,
    {
        self.leaves_of(id).filter(|leaf| predicate(leaf)).count()
    }

    /// Post-order pass: wherever all of a node's children share an identical
    /// `(line_width, line_color)` pair, the node itself acquires that pair.
    ///
    /// Rendering exploits this to draw connected runs of edges in one style.
    /// Must run after style rules have been applied and before layout.
    pub fn upmerge_linestyle(&mut self) {
        if !self.is_empty() {
            self.upmerge_from(self.root_index);
        }
    }

    fn upmerge_from(&mut self, id: NodeId) {
        let children = self[id].children().to_vec();
        if children.is_empty() {
            return;
        }

        for &child in &children {
            self.upmerge_from(child);
        }

        let first = &self[children[0]].style;
        let shared = (first.line_width, first.line_color);
        let all_match = children
            .iter()
            .all(|&child| (self[child].style.line_width, self[child].style.line_color) == shared);

        if all_match {
            self[id].style.line_width = shared.0;
            self[id].style.line_color = shared.1;
        }
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// Uses a stack-based approach to traverse the tree without recursion;
/// children are visited left to right.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        PreOrderIter {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse so the leftmost is processed first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}

/// Iterator over the leaves of a subtree in left-to-right (textual) order.
pub struct Leaves<'a> {
    inner: PreOrderIter<'a>,
}

impl<'a> Leaves<'a> {
    fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        Leaves {
            inner: PreOrderIter::new(tree, start),
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|node| node.is_leaf())
    }
}
