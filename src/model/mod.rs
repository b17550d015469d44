//! Tree model: arena-based phylogenetic tree and its derived queries.

/// Tree node type and distance newtype
pub mod node;
/// Phylogenetic tree structure and operations
pub mod tree;

pub use node::{Distance, Node, NodeId};
pub use tree::{Leaves, PreOrderIter, Tree};
