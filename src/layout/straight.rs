//! Straight (rectangular cladogram) layout.

use crate::layout::surface::{DrawingSurface, Point};
use crate::layout::{edge_units, LayoutError, MARGIN, TEXT_SPACING_FACTOR, TREE_WIDTH};
use crate::model::{NodeId, Tree};
use crate::style::Color;
use log::debug;

// =#========================================================================#=
// STRAIGHT RENDERING
// =#========================================================================#=
/// Renders `tree` as a left-to-right cladogram on `surface`.
///
/// Leaves occupy evenly spaced rows with their labels right of the tree;
/// each subtree's vertical center is the midpoint of the rows its leaves
/// occupy. When every node below the root carries a distance, horizontal
/// extents are proportional to branch lengths and a graduated distance scale
/// is drawn above the tree; otherwise each edge is one fixed step and no
/// scale appears.
///
/// # Errors
/// [LayoutError::EmptyTree] for a zero-node tree (one leaf is legal), or
/// [LayoutError::Io] if the surface fails to persist.
pub fn render_straight<S: DrawingSurface>(tree: &Tree, surface: &mut S) -> Result<(), LayoutError> {
    if tree.is_empty() {
        return Err(LayoutError::EmptyTree);
    }

    let n = tree.num_leaves();
    let (text_height, mut text_width) = surface.measure_text("A");
    for leaf in tree.leaves() {
        if let Some(label) = leaf.label() {
            text_width = text_width.max(surface.measure_text(label).1);
        }
    }

    let gap = text_height * TEXT_SPACING_FACTOR;
    let scale_height = text_height + gap * 4.0;
    let tree_height = (text_height + gap) * n as f64;
    let height = MARGIN + scale_height + tree_height + MARGIN;
    let width = MARGIN + TREE_WIDTH + gap + text_width + MARGIN;
    surface.create_canvas(width, height);
    debug!("straight canvas {width}x{height} for {n} leaves");

    let root = tree.root_id();
    let (weighted, distance_height) = match tree.distance_height(root) {
        Some(dh) => (true, dh),
        None => (false, 0.0),
    };
    let scale = weighted.then(|| calibrate_scale(distance_height));

    // Horizontal units must match the scale line, so "biggest" governs both.
    let biggest = match scale {
        Some((top, increment)) => top.max(increment),
        None => (tree.height(root) as f64).max(1.0),
    };

    let label_x = MARGIN + TREE_WIDTH + gap;
    for (ix, leaf) in tree.leaves().enumerate() {
        if let Some(label) = leaf.label() {
            let y = MARGIN + scale_height + gap * ix as f64 + text_height * (ix + 1) as f64;
            surface.draw_text(Point::new(label_x, y), label, 0.0, leaf.style.text_color);
        }
    }

    let right_edge = MARGIN + TREE_WIDTH;
    let vstep = text_height + gap;
    let hstep = TREE_WIDTH / biggest;
    let y = (MARGIN + scale_height + 0.5 * tree_height).round();
    let start_depth = biggest
        - if weighted {
            distance_height
        } else {
            tree.height(root) as f64 + 1.0
        };
    draw_straight_node(tree, root, y, start_depth, vstep, hstep, right_edge, weighted, surface);

    if let Some((_, increment)) = scale {
        draw_scale(surface, biggest, increment, scale_height, gap);
    }

    surface.save()?;
    Ok(())
}

/// Draws `id`'s own horizontal segment at row `y`, then connectors down to
/// each child, recursing with each child centered on its leaf rows.
#[allow(clippy::too_many_arguments)]
fn draw_straight_node<S: DrawingSurface>(
    tree: &Tree,
    id: NodeId,
    y: f64,
    depth: f64,
    vstep: f64,
    hstep: f64,
    right_edge: f64,
    weighted: bool,
    surface: &mut S,
) {
    let node = &tree[id];
    let dist = edge_units(node, weighted);

    // Back up half a stroke so the joint with the parent connector is clean.
    let x1 = MARGIN + depth * hstep - node.style.line_width / 2.0;
    let x2 = MARGIN + (depth + dist) * hstep;
    surface.draw_line(
        Point::new(x1, y),
        Point::new(x2, y),
        node.style.line_color,
        node.style.line_width,
        false,
    );

    if node.is_leaf() {
        // Trailing segment so all labels line up at the right edge.
        surface.draw_line(
            Point::new(x2, y),
            Point::new(right_edge, y),
            node.style.line_color,
            node.style.line_width,
            false,
        );
        return;
    }

    let depth = depth + dist;
    let mut cy = y - (vstep * leaf_count(tree, id) as f64 / 2.0).round();
    for &child in node.children() {
        let ydelta = (vstep * leaf_count(tree, child) as f64 / 2.0).round();
        cy += ydelta;

        let child_style = &tree[child].style;
        surface.draw_line(
            Point::new(x2, y),
            Point::new(x2, cy),
            child_style.line_color,
            child_style.line_width,
            false,
        );
        draw_straight_node(tree, child, cy, depth, vstep, hstep, right_edge, weighted, surface);

        cy += ydelta;
    }
}

fn leaf_count(tree: &Tree, id: NodeId) -> usize {
    tree.leaves_of(id).count()
}

// ============================================================================
// Distance scale
// ============================================================================
/// Rounds the largest root-to-leaf distance up to the scale increment.
///
/// Zero is assumed to be the smallest value on the scale.
fn calibrate_scale(top_value: f64) -> (f64, f64) {
    let scale = 10.0;
    let biggest = (top_value * scale).ceil() / scale;
    (biggest, 1.0 / scale)
}

fn draw_scale<S: DrawingSurface>(
    surface: &mut S,
    biggest: f64,
    increment: f64,
    scale_height: f64,
    gap: f64,
) {
    let baseline = MARGIN + scale_height;
    surface.draw_line(
        Point::new(MARGIN, baseline),
        Point::new(MARGIN + TREE_WIDTH, baseline),
        Color::BLACK,
        1.0,
        false,
    );

    // Build each tick value up from zero; subtracting the increment from
    // the top drifts below zero at the last tick and labels it "-0.0".
    let ticks = (biggest / increment).round() as usize;
    for i in 0..=ticks {
        let value = increment * (ticks - i) as f64;
        let x = MARGIN + ((1.0 - value / biggest) * TREE_WIDTH).round();
        surface.draw_line(
            Point::new(x, baseline),
            Point::new(x, baseline - gap * 3.0),
            Color::BLACK,
            1.0,
            false,
        );

        let text = format!("{value:.1}");
        let half_width = surface.measure_text(&text).1 / 2.0;
        surface.draw_text(
            Point::new(x - half_width, baseline - gap * 4.0),
            &text,
            0.0,
            Color::BLACK,
        );
    }
}
