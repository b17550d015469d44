//! Styling contract between the style engine and the layout engine.
//!
//! The layout engine never reads style *rules*; it reads the per-node
//! cosmetic attributes ([NodeStyle]) and the [Legends] derived from the
//! rules. This module provides both, plus [apply_rules] to mutate a tree's
//! cosmetic attributes from declarative rules and external per-leaf data.
//!
//! Parsing rule *files* is out of scope for this crate; callers construct
//! [StyleRule] values themselves.

use crate::model::Tree;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

// =#========================================================================#=
// COLOR
// =#========================================================================#=
/// An RGB color, 0..=255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from its red, green, and blue components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Returns the HTML hex form, e.g. `#4dab4d`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Error returned when a color string is not of the form `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected \"#rrggbb\"")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|rest| rest.len() == 6)
            .ok_or_else(|| ColorParseError(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };

        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

// =#========================================================================#=
// NODE STYLE
// =#========================================================================#=
/// Cosmetic attributes of one tree node, consumed by the layout engine.
///
/// Defaults: no dot, dot size 5, line width 1, black lines and text,
/// no banner. `dot_size` keeps a value even without a dot color because
/// radial label offsets are measured from the dot radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    /// Color of the leaf dot; `None` means "do not draw a dot".
    pub dot_color: Option<Color>,
    pub dot_size: f64,
    pub line_width: f64,
    pub line_color: Color,
    pub text_color: Color,
    /// If set, the node's label becomes a banner title spanning its clade.
    pub banner_color: Option<Color>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        NodeStyle {
            dot_color: None,
            dot_size: 5.0,
            line_width: 1.0,
            line_color: Color::BLACK,
            text_color: Color::BLACK,
            banner_color: None,
        }
    }
}

// =#========================================================================#=
// STYLE RULES
// =#========================================================================#=
/// A row of external per-leaf data, keyed by field name.
pub type DataRow = HashMap<String, String>;

/// Condition deciding whether a rule applies to a node's data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleMatch {
    /// Applies to every node.
    All,
    /// Applies to nodes whose data row has `field` equal to `value`.
    FieldEquals { field: String, value: String },
}

impl RuleMatch {
    fn matches(&self, row: Option<&DataRow>) -> bool {
        match self {
            RuleMatch::All => true,
            RuleMatch::FieldEquals { field, value } => {
                row.is_some_and(|row| row.get(field) == Some(value))
            }
        }
    }
}

/// What a matching rule does to a node.
///
/// A closed enumeration with typed payloads; there is no fallthrough for
/// unknown properties.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    SetTextColor(Color),
    SetLineColor(Color),
    SetLineWidth(f64),
    SetDotColor(Color),
    /// Replace the node's label with the named field of its data row
    /// (keeps the old label when the row or field is missing).
    RelabelFromField(String),
}

/// One declarative styling rule: a match condition and an action.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub matches: RuleMatch,
    pub action: RuleAction,
}

impl StyleRule {
    pub fn new(matches: RuleMatch, action: RuleAction) -> Self {
        StyleRule { matches, action }
    }
}

// =#========================================================================#=
// LEGENDS
// =#========================================================================#=
/// Insertion-ordered mapping from a data value to the color it was assigned.
pub type Legend = Vec<(String, Color)>;

/// The two legend mappings derived from the applied rules, consumed by the
/// radial layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legends {
    /// Label text colored per data value.
    pub text: Legend,
    /// Leaf dots colored per data value.
    pub dot: Legend,
}

// ============================================================================
// RULE APPLICATION
// ============================================================================
/// Applies `rules` to every node of `tree`, then upmerges line styles and
/// derives the [Legends].
///
/// For each node, its data row is looked up in `data` by label. A node whose
/// label has no data row is not an error: rules that need a row simply do
/// not match and the default cosmetic attributes stay in place.
///
/// Legend entries come from [RuleMatch::FieldEquals] rules carrying
/// [RuleAction::SetTextColor] or [RuleAction::SetDotColor]; a value assigned
/// twice keeps its position but takes the last color.
pub fn apply_rules(tree: &mut Tree, rules: &[StyleRule], data: &HashMap<String, DataRow>) -> Legends {
    let mut applied = 0usize;

    for id in 0..tree.num_nodes() {
        let row = tree[id].label().and_then(|label| data.get(label));

        for rule in rules {
            if !rule.matches.matches(row) {
                continue;
            }
            applied += 1;

            let node = &mut tree[id];
            match &rule.action {
                RuleAction::SetTextColor(color) => node.style.text_color = *color,
                RuleAction::SetLineColor(color) => node.style.line_color = *color,
                RuleAction::SetLineWidth(width) => node.style.line_width = *width,
                RuleAction::SetDotColor(color) => node.style.dot_color = Some(*color),
                RuleAction::RelabelFromField(field) => {
                    if let Some(new_label) = row.and_then(|row| row.get(field)) {
                        let new_label = new_label.clone();
                        tree[id].set_label(Some(new_label));
                    }
                }
            }
        }
    }

    tree.upmerge_linestyle();
    debug!("applied {} rule matches across {} nodes", applied, tree.num_nodes());

    let mut legends = Legends::default();
    for rule in rules {
        let RuleMatch::FieldEquals { value, .. } = &rule.matches else {
            continue;
        };
        match rule.action {
            RuleAction::SetTextColor(color) => legend_insert(&mut legends.text, value, color),
            RuleAction::SetDotColor(color) => legend_insert(&mut legends.dot, value, color),
            _ => {}
        }
    }

    legends
}

fn legend_insert(legend: &mut Legend, key: &str, color: Color) {
    match legend.iter_mut().find(|(existing, _)| existing == key) {
        Some(entry) => entry.1 = color,
        None => legend.push((key.to_string(), color)),
    }
}
