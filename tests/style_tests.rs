//! Tests for colors, style rules, and legend derivation.

use cladograph::model::Tree;
use cladograph::newick::parse_newick_str;
use cladograph::style::{apply_rules, Color, DataRow, NodeStyle, RuleAction, RuleMatch, StyleRule};
use std::collections::HashMap;

fn parse(text: &str) -> Tree {
    parse_newick_str(text).unwrap()
}

fn row(fields: &[(&str, &str)]) -> DataRow {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn group_rule(value: &str, action: RuleAction) -> StyleRule {
    StyleRule::new(
        RuleMatch::FieldEquals {
            field: "group".to_string(),
            value: value.to_string(),
        },
        action,
    )
}

// ============================================================================
// Colors
// ============================================================================
#[test]
fn test_parse_hex_color() {
    let color: Color = "#4dab4d".parse().unwrap();
    assert_eq!(color, Color::new(0x4d, 0xab, 0x4d));
    assert_eq!(color.to_hex(), "#4dab4d");
}

#[test]
fn test_parse_uppercase_hex_color() {
    let color: Color = "#B3059E".parse().unwrap();
    assert_eq!(color, Color::new(0xb3, 0x05, 0x9e));
    assert_eq!(color.to_hex(), "#b3059e");
}

#[test]
fn test_invalid_colors_rejected() {
    assert!("4dab4d".parse::<Color>().is_err());
    assert!("#4dab4".parse::<Color>().is_err());
    assert!("#4dab4d0".parse::<Color>().is_err());
    assert!("#zzzzzz".parse::<Color>().is_err());
}

#[test]
fn test_default_node_style() {
    let style = NodeStyle::default();
    assert_eq!(style.dot_color, None);
    assert_eq!(style.dot_size, 5.0);
    assert_eq!(style.line_width, 1.0);
    assert_eq!(style.line_color, Color::BLACK);
    assert_eq!(style.text_color, Color::BLACK);
    assert_eq!(style.banner_color, None);
}

// ============================================================================
// Rule application
// ============================================================================
#[test]
fn test_field_equals_sets_matching_nodes_only() {
    let mut tree = parse("(ant,bee,cod);");
    let red = Color::new(200, 0, 0);
    let data = HashMap::from([
        ("ant".to_string(), row(&[("group", "insect")])),
        ("bee".to_string(), row(&[("group", "insect")])),
        ("cod".to_string(), row(&[("group", "fish")])),
    ]);
    let rules = vec![group_rule("insect", RuleAction::SetTextColor(red))];

    apply_rules(&mut tree, &rules, &data);

    let colors: Vec<_> = tree.leaves().map(|n| n.style.text_color).collect();
    assert_eq!(colors, vec![red, red, Color::BLACK]);
}

#[test]
fn test_all_rule_applies_everywhere() {
    let mut tree = parse("(ant,(bee,cod)inner)top;");
    let rules = vec![StyleRule::new(RuleMatch::All, RuleAction::SetLineWidth(3.0))];

    apply_rules(&mut tree, &rules, &HashMap::new());

    assert!(tree.iter().all(|n| n.style.line_width == 3.0));
}

#[test]
fn test_missing_data_row_is_not_an_error() {
    let mut tree = parse("(ant,mystery);");
    let rules = vec![group_rule("insect", RuleAction::SetLineWidth(4.0))];
    let data = HashMap::from([("ant".to_string(), row(&[("group", "insect")]))]);

    apply_rules(&mut tree, &rules, &data);

    let widths: Vec<_> = tree.leaves().map(|n| n.style.line_width).collect();
    assert_eq!(widths, vec![4.0, 1.0]);
}

#[test]
fn test_relabel_from_field() {
    let mut tree = parse("(ant,bee);");
    let data = HashMap::from([("ant".to_string(), row(&[("name", "Lasius niger")]))]);
    let rules = vec![StyleRule::new(
        RuleMatch::All,
        RuleAction::RelabelFromField("name".to_string()),
    )];

    apply_rules(&mut tree, &rules, &data);

    let labels: Vec<_> = tree.leaves().filter_map(|n| n.label()).collect();
    // bee has no data row, so it keeps its old label
    assert_eq!(labels, vec!["Lasius niger", "bee"]);
}

#[test]
fn test_set_dot_color() {
    let mut tree = parse("(ant,bee);");
    let blue = Color::new(0, 0, 200);
    let data = HashMap::from([("ant".to_string(), row(&[("group", "insect")]))]);
    let rules = vec![group_rule("insect", RuleAction::SetDotColor(blue))];

    apply_rules(&mut tree, &rules, &data);

    let dots: Vec<_> = tree.leaves().map(|n| n.style.dot_color).collect();
    assert_eq!(dots, vec![Some(blue), None]);
}

#[test]
fn test_apply_rules_upmerges_line_styles() {
    let mut tree = parse("(ant,bee)pair;");
    let red = Color::new(200, 0, 0);
    let data = HashMap::from([
        ("ant".to_string(), row(&[("group", "insect")])),
        ("bee".to_string(), row(&[("group", "insect")])),
    ]);
    let rules = vec![group_rule("insect", RuleAction::SetLineColor(red))];

    apply_rules(&mut tree, &rules, &data);

    // Both children ended up identical, so the parent acquired their style.
    assert_eq!(tree.root().style.line_color, red);
}

// ============================================================================
// Legend derivation
// ============================================================================
#[test]
fn test_legends_from_field_rules() {
    let mut tree = parse("(ant,cod);");
    let red = Color::new(200, 0, 0);
    let blue = Color::new(0, 0, 200);
    let rules = vec![
        group_rule("insect", RuleAction::SetTextColor(red)),
        group_rule("fish", RuleAction::SetDotColor(blue)),
    ];

    let legends = apply_rules(&mut tree, &rules, &HashMap::new());

    assert_eq!(legends.text, vec![("insect".to_string(), red)]);
    assert_eq!(legends.dot, vec![("fish".to_string(), blue)]);
}

#[test]
fn test_legend_reassignment_keeps_position_takes_last_color() {
    let mut tree = parse("(ant,bee);");
    let red = Color::new(200, 0, 0);
    let green = Color::new(0, 200, 0);
    let blue = Color::new(0, 0, 200);
    let rules = vec![
        group_rule("insect", RuleAction::SetTextColor(red)),
        group_rule("fish", RuleAction::SetTextColor(blue)),
        group_rule("insect", RuleAction::SetTextColor(green)),
    ];

    let legends = apply_rules(&mut tree, &rules, &HashMap::new());

    assert_eq!(
        legends.text,
        vec![("insect".to_string(), green), ("fish".to_string(), blue)]
    );
}

#[test]
fn test_width_and_relabel_rules_produce_no_legend() {
    let mut tree = parse("(ant,bee);");
    let rules = vec![
        group_rule("insect", RuleAction::SetLineWidth(2.0)),
        StyleRule::new(RuleMatch::All, RuleAction::SetTextColor(Color::BLACK)),
    ];

    let legends = apply_rules(&mut tree, &rules, &HashMap::new());

    assert!(legends.text.is_empty());
    assert!(legends.dot.is_empty());
}
