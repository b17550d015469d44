//! Drawing surface capability consumed by the layout engine.
//!
//! Concrete backends (raster, vector, page output) live outside this crate;
//! the layout code depends only on this trait. Coordinates are in logical
//! pixels with the origin at the top left and y growing downward.

use crate::style::Color;
use std::io;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the point at angle `radians` around `center` at distance
    /// `radius`.
    pub fn on_circle(center: Point, radians: f64, radius: f64) -> Point {
        Point::new(
            center.x + radians.cos() * radius,
            center.y + radians.sin() * radius,
        )
    }
}

/// Abstract canvas the layout engine paints on.
///
/// One render pass calls [create_canvas](DrawingSurface::create_canvas)
/// exactly once before any painting call and
/// [save](DrawingSurface::save) exactly once at the end; painting calls are
/// strictly sequential in between.
pub trait DrawingSurface {
    /// Allocates the logical canvas.
    fn create_canvas(&mut self, width: f64, height: f64);

    /// Returns `(height, width)` of `text` at the surface's font size.
    fn measure_text(&self, text: &str) -> (f64, f64);

    /// The font size text is measured and painted at.
    fn font_size(&self) -> f64;

    fn draw_line(&mut self, from: Point, to: Point, color: Color, stroke: f64, dashed: bool);

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Paints a circular arc from `start` to `end` (radians) at `radius`
    /// around `center`. When `id` is given, the arc path is registered so
    /// text can later be drawn along it.
    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &mut self,
        center: Point,
        start: f64,
        end: f64,
        radius: f64,
        color: Color,
        stroke: f64,
        id: Option<&str>,
    );

    /// Paints `text` anchored at `pos`, rotated clockwise by `rotation`
    /// degrees.
    fn draw_text(&mut self, pos: Point, text: &str, rotation: f64, color: Color);

    /// Paints `text` along the arc previously registered under `arc_id`.
    fn draw_text_along_arc(&mut self, text: &str, arc_id: &str, font_size: f64);

    /// Flushes and closes the output target.
    fn save(&mut self) -> io::Result<()>;
}
