#![allow(dead_code)]

use cladograph::layout::{DrawingSurface, Point};
use cladograph::style::Color;
use std::io;

/// One recorded call on the surface, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Canvas {
        width: f64,
        height: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        stroke: f64,
        dashed: bool,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Arc {
        center: Point,
        start: f64,
        end: f64,
        radius: f64,
        color: Color,
        stroke: f64,
        id: Option<String>,
    },
    Text {
        pos: Point,
        text: String,
        rotation: f64,
        color: Color,
    },
    TextAlongArc {
        text: String,
        arc_id: String,
        font_size: f64,
    },
}

/// Drawing surface that records every call instead of painting.
///
/// Text metrics are deterministic: every glyph is 7 units wide and lines
/// are 12 units tall, so layout geometry can be asserted exactly.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub saves: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn canvas(&self) -> Option<(f64, f64)> {
        self.ops.iter().find_map(|op| match op {
            Op::Canvas { width, height } => Some((*width, *height)),
            _ => None,
        })
    }

    pub fn circles(&self) -> Vec<(Point, f64, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle { center, radius, color } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(Point, String, f64, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { pos, text, rotation, color } => {
                    Some((*pos, text.clone(), *rotation, *color))
                }
                _ => None,
            })
            .collect()
    }

    pub fn dashed_lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { dashed: true, .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn create_canvas(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Canvas { width, height });
    }

    fn measure_text(&self, text: &str) -> (f64, f64) {
        (12.0, text.chars().count() as f64 * 7.0)
    }

    fn font_size(&self) -> f64 {
        12.0
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, stroke: f64, dashed: bool) {
        self.ops.push(Op::Line { from, to, color, stroke, dashed });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(Op::Circle { center, radius, color });
    }

    fn draw_arc(
        &mut self,
        center: Point,
        start: f64,
        end: f64,
        radius: f64,
        color: Color,
        stroke: f64,
        id: Option<&str>,
    ) {
        self.ops.push(Op::Arc {
            center,
            start,
            end,
            radius,
            color,
            stroke,
            id: id.map(str::to_string),
        });
    }

    fn draw_text(&mut self, pos: Point, text: &str, rotation: f64, color: Color) {
        self.ops.push(Op::Text {
            pos,
            text: text.to_string(),
            rotation,
            color,
        });
    }

    fn draw_text_along_arc(&mut self, text: &str, arc_id: &str, font_size: f64) {
        self.ops.push(Op::TextAlongArc {
            text: text.to_string(),
            arc_id: arc_id.to_string(),
            font_size,
        });
    }

    fn save(&mut self) -> io::Result<()> {
        self.saves += 1;
        Ok(())
    }
}
