//! # cladograph
//!
//! Parser, serializer, and layout engine for phylogenetic trees in the
//! Newick format.
//!
//! The crate covers the pipeline from text to geometry:
//! - [model]: rooted, ordered, multi-child trees stored in an arena, with
//!   the derived queries layout needs (leaves, height, distance height,
//!   smallest enclosing clade).
//! - [newick]: parsing Newick text into a tree and serializing it back,
//!   round-tripping labels, branch lengths, and bootstrap values.
//! - [style]: per-node cosmetic attributes plus declarative rules that set
//!   them from external per-leaf data.
//! - [layout]: radial (circular dendrogram) and straight (rectangular
//!   cladogram) rendering against an abstract [DrawingSurface]; concrete
//!   backends live outside this crate.
//!
//! ## Example
//! ```
//! use cladograph::{parse_newick_str, to_newick};
//!
//! let tree = parse_newick_str("(ant:17,(bat:31,cow:22)mammals:7)root;").unwrap();
//! assert_eq!(tree.num_leaves(), 3);
//! assert_eq!(tree.root().label(), Some("root"));
//!
//! // Serialization round-trips the canonical form.
//! assert_eq!(to_newick(&tree), "(ant:17,(bat:31,cow:22)mammals:7)root;");
//! ```

pub mod layout;
pub mod model;
pub mod newick;
pub mod style;

pub use layout::{render_radial, render_straight, DrawingSurface, LayoutError, Point};
pub use model::{Node, NodeId, Tree};
pub use newick::{parse_newick_str, to_newick, FormatError, FormatErrorKind};
pub use style::{apply_rules, Color, Legends, NodeStyle, RuleAction, RuleMatch, StyleRule};
