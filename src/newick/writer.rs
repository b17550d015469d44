//! Serialization of a [Tree] back to Newick text.

use crate::model::{NodeId, Tree};

/// Serializes `tree` to a Newick string, always ending in `;`.
///
/// Only structural data is written (labels, distances, bootstraps); style
/// attributes are not part of the format. Distances use the shortest decimal
/// form that round-trips through `f64`, so `parse(write(tree))` rebuilds an
/// identical tree. A zero distance is written `:0`.
pub fn to_newick(tree: &Tree) -> String {
    let mut out = String::with_capacity(tree.num_nodes() * 8);
    if !tree.is_empty() {
        write_node(tree, tree.root_id(), &mut out);
    }
    out.push(';');
    out
}

fn write_node(tree: &Tree, id: NodeId, out: &mut String) {
    let node = &tree[id];

    if !node.is_leaf() {
        out.push('(');
        for (ix, &child) in node.children().iter().enumerate() {
            if ix > 0 {
                out.push(',');
            }
            write_node(tree, child, out);
        }
        out.push(')');
    }

    if let Some(label) = node.label() {
        out.push_str(label);
    }
    if let Some(distance) = node.distance() {
        out.push(':');
        out.push_str(&format_distance(*distance));

        // Bootstraps are only well-formed directly after a distance.
        if let Some(bootstrap) = node.bootstrap() {
            out.push('[');
            out.push_str(&bootstrap.to_string());
            out.push(']');
        }
    }
}

/// Formats a distance as decimal text.
///
/// `f64`'s `Display` already produces the shortest round-tripping decimal
/// form and never falls back to scientific notation, which Newick readers
/// commonly reject.
fn format_distance(value: f64) -> String {
    value.to_string()
}
