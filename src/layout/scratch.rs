//! Per-render polar coordinate side table.
//!
//! Leaf angles live here rather than on the nodes themselves, so one
//! render's state never leaks into the next and the tree stays immutable
//! during layout.

use crate::model::{NodeId, Tree};

/// Polar coordinates of every leaf, indexed by [NodeId]. Entries for
/// internal nodes stay zero; their angles are derived on demand.
pub(crate) struct PolarScratch {
    radians: Vec<f64>,
    degrees: Vec<f64>,
}

impl PolarScratch {
    pub(crate) fn new(num_nodes: usize) -> Self {
        PolarScratch {
            radians: vec![0.0; num_nodes],
            degrees: vec![0.0; num_nodes],
        }
    }

    /// Records a leaf's angle, both as raw radians (counterclockwise, used
    /// for trigonometry) and as clockwise degrees (used for text rotation).
    pub(crate) fn set_leaf(&mut self, id: NodeId, radians: f64, degrees: f64) {
        self.radians[id] = radians;
        self.degrees[id] = degrees;
    }

    pub(crate) fn radians(&self, id: NodeId) -> f64 {
        self.radians[id]
    }

    pub(crate) fn degrees(&self, id: NodeId) -> f64 {
        self.degrees[id]
    }

    /// Mean leaf angle under `id`; internal spokes are drawn at this angle.
    pub(crate) fn average_radians(&self, tree: &Tree, id: NodeId) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for leaf in tree.leaves_of(id) {
            sum += self.radians[leaf.index()];
            count += 1;
        }
        sum / count as f64
    }

    /// `(min, max)` leaf angle under `id`; the angular span a banner covers.
    pub(crate) fn radian_span(&self, tree: &Tree, id: NodeId) -> (f64, f64) {
        let mut lowest = f64::MAX;
        let mut highest = f64::MIN;
        for leaf in tree.leaves_of(id) {
            let r = self.radians[leaf.index()];
            lowest = lowest.min(r);
            highest = highest.max(r);
        }
        (lowest, highest)
    }
}
