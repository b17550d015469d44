//! Radial (circular dendrogram) layout.

use crate::layout::scratch::PolarScratch;
use crate::layout::surface::{DrawingSurface, Point};
use crate::layout::{
    edge_units, LayoutError, EMPTY_CENTER_FACTOR, LEGEND_RESERVE_WIDTH, MIN_CIRCUMFERENCE,
    SCALE_FACTOR, TEXT_SPACING_FACTOR,
};
use crate::model::{NodeId, Tree};
use crate::style::{Color, Legend, Legends};
use log::debug;
use std::f64::consts::{PI, TAU};

/// Reference string sized once to reserve radial room for banner titles.
const BANNER_REFERENCE_TEXT: &str = "This is a reasonably long text, I think [Key] (foo)";

// =#========================================================================#=
// RADIAL RENDERING
// =#========================================================================#=
/// Renders `tree` as a circular dendrogram on `surface`.
///
/// Leaves are placed at equal angular increments around a circle whose
/// circumference grows with the leaf count, clamped to a minimum so small
/// trees stay legible. Internal structure radiates inward, leaving an empty
/// disc at the center. Branch lengths are honored when every node below the
/// root has one; otherwise each edge counts as one step.
///
/// Drawing order: leaf dots and labels, then edges root-to-rim, then the
/// legends, then clade banners, then a single `save` on the surface.
///
/// # Errors
/// [LayoutError::EmptyTree] for a zero-node tree (one leaf is legal), or
/// [LayoutError::Io] if the surface fails to persist.
pub fn render_radial<S: DrawingSurface>(
    tree: &Tree,
    surface: &mut S,
    legends: &Legends,
) -> Result<(), LayoutError> {
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
    // Room for the legend block even when labels are short.
    text_width = text_width.max(LEGEND_RESERVE_WIDTH);

    let gap = text_height * TEXT_SPACING_FACTOR;
    let circumference = (n as f64 * (text_height + gap) * SCALE_FACTOR).max(MIN_CIRCUMFERENCE);
    let side = circumference + text_width * 2.0 + gap * 2.0;
    surface.create_canvas(side, side);
    debug!("radial canvas {side}x{side} for {n} leaves");

    let center = Point::new(side / 2.0, side / 2.0);
    let radius = circumference / 2.0;
    let angle_step = TAU / n as f64;

    // Angular nudge that centers a label on its dot.
    let text_step = (PI * text_height / circumference) * 0.3;

    let mut scratch = PolarScratch::new(tree.num_nodes());

    for (ix, leaf) in tree.leaves().enumerate() {
        let radians = angle_step * ix as f64;
        let degrees = 360.0 - (radians / TAU) * 360.0;
        scratch.set_leaf(leaf.index(), radians, degrees);

        if let Some(label) = leaf.label() {
            let rotation = scratch.degrees(leaf.index());
            let (anchor, rotation) = if rotation > 90.0 && rotation < 270.0 {
                // Left half: flip the rotation and anchor past the label so
                // the text still reads left to right.
                let label_width = surface.measure_text(label).1;
                let anchor = Point::on_circle(
                    center,
                    radians - text_step * 0.5,
                    radius + label_width + leaf.style.dot_size + 2.0,
                );
                (anchor, rotation - 180.0)
            } else {
                let anchor = Point::on_circle(
                    center,
                    radians + text_step,
                    radius + leaf.style.dot_size + 2.0,
                );
                (anchor, rotation)
            };
            surface.draw_text(anchor, label, rotation, leaf.style.text_color);
        }

        if let Some(color) = leaf.style.dot_color {
            let dot = Point::on_circle(center, radians, radius);
            surface.draw_circle(dot, leaf.style.dot_size, color);
        }
    }

    let root = tree.root_id();
    let (weighted, mut h) = match tree.distance_height(root) {
        Some(dh) => (true, dh),
        None => (false, tree.height(root) as f64),
    };
    if h <= 0.0 {
        h = 1.0;
    }

    let empty_part = radius * EMPTY_CENTER_FACTOR;
    let radial_step = (radius - empty_part) / h;

    // Spoke from the exact center out to the edge of the empty disc.
    let spoke_angle = scratch.average_radians(tree, root);
    let root_style = &tree[root].style;
    surface.draw_line(
        center,
        Point::on_circle(center, spoke_angle, empty_part),
        root_style.line_color,
        root_style.line_width,
        false,
    );
    draw_node(tree, root, empty_part, center, radius, radial_step, weighted, &scratch, surface);

    draw_dot_legend(surface, &legends.dot);
    draw_text_legend(surface, &legends.text);
    draw_banners(tree, surface, center, radius, &scratch);

    surface.save()?;
    Ok(())
}

/// Draws the edges from `id` outward, starting at `used_radius`.
#[allow(clippy::too_many_arguments)]
fn draw_node<S: DrawingSurface>(
    tree: &Tree,
    id: NodeId,
    used_radius: f64,
    center: Point,
    radius: f64,
    step: f64,
    weighted: bool,
    scratch: &PolarScratch,
    surface: &mut S,
) {
    let node = &tree[id];

    if node.is_leaf() {
        // Dashed filler out to the rim when the subtree falls short of it.
        if used_radius >= radius - node.style.dot_size {
            return;
        }
        let radians = scratch.radians(id);
        surface.draw_line(
            Point::on_circle(center, radians, used_radius),
            Point::on_circle(center, radians, radius - node.style.dot_size),
            node.style.line_color,
            node.style.line_width,
            true,
        );
        return;
    }

    let mut lowest = f64::MAX;
    let mut highest = f64::MIN;
    for &child in node.children() {
        let radians = scratch.average_radians(tree, child);
        let length = step * edge_units(&tree[child], weighted);

        // Start half a stroke inside so the joint with the arc is clean.
        let inner = Point::on_circle(center, radians, used_radius - node.style.line_width / 2.0);
        let outer = Point::on_circle(
            center,
            radians,
            (used_radius + length).min(radius - node.style.dot_size),
        );
        surface.draw_line(inner, outer, node.style.line_color, node.style.line_width, false);

        lowest = lowest.min(radians);
        highest = highest.max(radians);

        draw_node(tree, child, used_radius + length, center, radius, step, weighted, scratch, surface);
    }

    // Arc joining the siblings at the node's own radius.
    surface.draw_arc(
        center,
        lowest,
        highest,
        used_radius,
        node.style.line_color,
        node.style.line_width,
        None,
    );
}

// ============================================================================
// Decorations
// ============================================================================
fn draw_dot_legend<S: DrawingSurface>(surface: &mut S, legend: &Legend) {
    if legend.is_empty() {
        return;
    }

    let text_height = surface.measure_text("X").0;
    let offset = text_height * 2.0;
    let x = offset;
    let mut y = offset;
    let dot_size = text_height / 4.0;
    let gap = text_height / 4.0;

    for (name, color) in legend {
        surface.draw_circle(Point::new(x, y), dot_size, *color);
        surface.draw_text(
            Point::new(x + dot_size + gap / 2.0, y + dot_size * 0.7),
            name,
            0.0,
            Color::BLACK,
        );
        y += gap + text_height;
    }
}

fn draw_text_legend<S: DrawingSurface>(surface: &mut S, legend: &Legend) {
    if legend.is_empty() {
        return;
    }

    let text_height = surface.measure_text("X").0;
    let offset = text_height * 2.0;
    let x = offset;
    let mut y = offset;
    let dot_size = text_height / 4.0;
    let gap = text_height / 3.0;

    for (name, color) in legend {
        surface.draw_text(Point::new(x, y + dot_size * 0.7), name, 0.0, *color);
        y += gap + text_height;
    }
}

/// Banner arcs spanning the angular range of each banner-marked clade, with
/// the node's label drawn along the arc path.
fn draw_banners<S: DrawingSurface>(
    tree: &Tree,
    surface: &mut S,
    center: Point,
    radius: f64,
    scratch: &PolarScratch,
) {
    let reserve = surface.measure_text(BANNER_REFERENCE_TEXT).1;
    let stroke = surface.font_size() * 4.0;
    let title_size = surface.font_size() * 2.0;

    for node in tree.iter() {
        let Some(color) = node.style.banner_color else {
            continue;
        };

        let (lowest, highest) = scratch.radian_span(tree, node.index());
        let arc_id = format!("banner{}", node.index());
        surface.draw_arc(center, lowest, highest, radius + reserve, color, stroke, Some(&arc_id));

        if let Some(title) = node.label() {
            surface.draw_text_along_arc(title, &arc_id, title_size);
        }
    }
}
