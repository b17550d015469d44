//! Layout engine: converts a styled [Tree](crate::model::Tree) into calls on
//! an abstract [DrawingSurface].
//!
//! Two modes are provided:
//! - [render_radial]: a circular dendrogram with leaves on the rim and
//!   internal structure radiating inward, plus legends and clade banners.
//! - [render_straight]: a left-to-right rectangular cladogram with an
//!   optional distance scale.
//!
//! Both modes honor branch lengths only when every node below the root
//! carries a recorded distance; otherwise they fall back to counting edges.

mod radial;
mod scratch;
mod straight;
pub mod surface;

pub use radial::render_radial;
pub use straight::render_straight;
pub use surface::{DrawingSurface, Point};

use crate::model::Node;
use thiserror::Error;

// Sizing heuristics shared by the two modes.
pub(crate) const SCALE_FACTOR: f64 = 0.35;
pub(crate) const MIN_CIRCUMFERENCE: f64 = 300.0;
pub(crate) const EMPTY_CENTER_FACTOR: f64 = 0.25;
pub(crate) const TEXT_SPACING_FACTOR: f64 = 0.1;
pub(crate) const LEGEND_RESERVE_WIDTH: f64 = 200.0;
pub(crate) const MARGIN: f64 = 20.0;
pub(crate) const TREE_WIDTH: f64 = 1000.0;

/// Error produced by a render pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Layout requires at least one node; one leaf is legal, zero is not.
    #[error("cannot lay out an empty tree")]
    EmptyTree,

    /// The drawing surface failed to persist its output.
    #[error("drawing surface I/O failure")]
    Io(#[from] std::io::Error),
}

/// Length of a node's own edge in layout units.
///
/// Weighted mode uses the recorded distance (0 for a root without one);
/// unweighted mode counts every edge as 1.
pub(crate) fn edge_units(node: &Node, weighted: bool) -> f64 {
    if weighted {
        node.distance().map_or(0.0, |d| *d)
    } else {
        1.0
    }
}
