//! The token extraction pass.

use std::collections::BTreeSet;

use blueprint_core::{DesignNode, EffectKind, NodeKind, TypeStyle};
use indexmap::IndexMap;

use crate::model::{DesignTokens, TypeToken};
use crate::naming::{color_name, typography_name};

/// Canonical spacing scale, keyed `"0"` upward.
const SPACING_SCALE: &[f64] = &[
    4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0, 80.0, 96.0, 128.0,
];

/// Canonical border-radius scale with its token names.
const RADIUS_SCALE: &[(f64, &str)] = &[
    (0.0, "none"),
    (2.0, "sm"),
    (4.0, "DEFAULT"),
    (6.0, "md"),
    (8.0, "lg"),
    (12.0, "xl"),
    (16.0, "2xl"),
    (24.0, "3xl"),
    (32.0, "full"),
];

/// Standard shadow ramp appended after the observed shadows.
const SHADOW_SCALE: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
];

/// Extract the design-token catalog from a node tree.
pub fn extract_tokens(root: &DesignNode) -> DesignTokens {
    let mut extractor = TokenExtractor::default();
    extractor.visit(root);
    extractor.into_tokens()
}

/// Accumulated distinct values from one traversal.
#[derive(Default)]
struct TokenExtractor {
    colors: BTreeSet<String>,
    typography: IndexMap<String, TypeStyle>,
    radii: Vec<f64>,
    shadows: Vec<String>,
}

impl TokenExtractor {
    fn visit(&mut self, node: &DesignNode) {
        for fill in &node.fills {
            if fill.visible {
                if let Some(color) = fill.color {
                    self.colors.insert(color.to_hex());
                }
            }
        }
        for stroke in &node.strokes {
            if stroke.visible {
                if let Some(color) = stroke.color {
                    self.colors.insert(color.to_hex());
                }
            }
        }

        if node.kind == NodeKind::Text {
            if let Some(style) = &node.text_style {
                let key = format!(
                    "{}-{}-{}",
                    style.font_family, style.font_size, style.font_weight
                );
                self.typography.insert(key, style.clone());
            }
        }

        if let Some(radius) = node.corner_radius {
            self.push_radius(radius);
        }
        if let Some(radii) = node.corner_radii {
            for radius in radii {
                self.push_radius(radius);
            }
        }

        for effect in &node.effects {
            if effect.kind == EffectKind::DropShadow && effect.visible {
                if let Some(shadow) = effect_signature(effect) {
                    if !self.shadows.contains(&shadow) {
                        self.shadows.push(shadow);
                    }
                }
            }
        }

        for child in &node.children {
            self.visit(child);
        }
    }

    fn push_radius(&mut self, radius: f64) {
        if !self.radii.iter().any(|r| *r == radius) {
            self.radii.push(radius);
        }
    }

    fn into_tokens(self) -> DesignTokens {
        let mut tokens = DesignTokens::new();

        for (index, hex) in self.colors.iter().enumerate() {
            tokens.colors.insert(color_name(hex, index), hex.clone());
        }

        for (index, style) in self.typography.values().enumerate() {
            let line_height = match (style.line_height_px, style.line_height_percent) {
                (Some(px), _) => format!("{px}px"),
                (None, Some(percent)) => format!("{percent}%"),
                (None, None) => "1.5".to_string(),
            };
            tokens.typography.insert(
                typography_name(style, index),
                TypeToken {
                    font_size: format!("{}px", style.font_size),
                    font_weight: format!("{}", style.font_weight),
                    line_height,
                    font_family: style.font_family.clone(),
                    letter_spacing: style.letter_spacing.map(|ls| format!("{ls}px")),
                },
            );
        }

        for (index, value) in SPACING_SCALE.iter().enumerate() {
            tokens.spacing.insert(index.to_string(), format!("{value}px"));
        }

        for (value, name) in RADIUS_SCALE {
            tokens
                .border_radius
                .insert((*name).to_string(), format!("{value}px"));
        }
        // Observed radii off the canonical scale still become tokens.
        let mut observed: Vec<f64> = self
            .radii
            .into_iter()
            .filter(|r| *r > 0.0 && !RADIUS_SCALE.iter().any(|(v, _)| v == r))
            .collect();
        observed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for radius in observed {
            tokens
                .border_radius
                .insert(format!("radius-{radius}"), format!("{radius}px"));
        }

        for (index, shadow) in self.shadows.iter().enumerate() {
            tokens
                .shadows
                .insert(format!("shadow-{}", index + 1), shadow.clone());
        }
        for (name, value) in SHADOW_SCALE {
            tokens
                .shadows
                .insert((*name).to_string(), (*value).to_string());
        }

        for (name, value) in [
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ] {
            tokens.breakpoints.insert(name.to_string(), value.to_string());
        }

        tokens
    }
}

/// Render a drop shadow as its token signature. Effects without a color or
/// offset carry nothing usable.
fn effect_signature(effect: &blueprint_core::Effect) -> Option<String> {
    let color = effect.color?;
    let offset = effect.offset?;
    let blur = effect.radius.unwrap_or(0.0);
    let spread = effect.spread.unwrap_or(0.0);
    Some(format!(
        "{}px {}px {}px {}px {}",
        offset.x,
        offset.y,
        blur,
        spread,
        color.to_css_rgba()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{Effect, Paint, Rgba, Vec2};

    fn frame(id: &str) -> DesignNode {
        DesignNode::new(id, "Frame", NodeKind::Frame)
    }

    #[test]
    fn test_black_and_white_map_to_named_tokens() {
        let root = frame("1")
            .with_child({
                let mut n = frame("2");
                n.fills = vec![Paint::solid(Rgba::BLACK)];
                n
            })
            .with_child({
                let mut n = frame("3");
                n.fills = vec![Paint::solid(Rgba::WHITE)];
                n
            });

        let tokens = extract_tokens(&root);
        assert_eq!(tokens.colors.get("black").map(String::as_str), Some("#000000"));
        assert_eq!(tokens.colors.get("white").map(String::as_str), Some("#ffffff"));
        assert_eq!(tokens.colors.len(), 2);
    }

    #[test]
    fn test_hidden_fills_are_skipped() {
        let mut node = frame("1");
        let mut paint = Paint::solid(Rgba::rgb(1.0, 0.0, 0.0));
        paint.visible = false;
        node.fills = vec![paint];

        let tokens = extract_tokens(&node);
        assert!(tokens.colors.is_empty());
    }

    #[test]
    fn test_typography_dedupes_on_family_size_weight() {
        let mut a = DesignNode::new("1", "Title", NodeKind::Text);
        a.text_style = Some(blueprint_core::TypeStyle::sized("Inter", 36.0, 700.0));
        let mut b = DesignNode::new("2", "Other Title", NodeKind::Text);
        b.text_style = Some(blueprint_core::TypeStyle::sized("Inter", 36.0, 700.0));
        let root = frame("0").with_child(a).with_child(b);

        let tokens = extract_tokens(&root);
        assert_eq!(tokens.typography.len(), 1);
        let heading = tokens.typography.get("heading-1").unwrap();
        assert_eq!(heading.font_size, "36px");
        assert_eq!(heading.font_weight, "700");
        assert_eq!(heading.line_height, "1.5");
    }

    #[test]
    fn test_spacing_scale_is_canonical() {
        let tokens = extract_tokens(&frame("1").with_bounds(137.0, 42.0));
        assert_eq!(tokens.spacing.get("0").map(String::as_str), Some("4px"));
        assert_eq!(tokens.spacing.get("12").map(String::as_str), Some("128px"));
        assert_eq!(tokens.spacing.len(), SPACING_SCALE.len());
    }

    #[test]
    fn test_observed_radius_joins_canonical_scale() {
        let mut node = frame("1");
        node.corner_radius = Some(10.0);
        let tokens = extract_tokens(&node);
        assert_eq!(tokens.border_radius.get("lg").map(String::as_str), Some("8px"));
        assert_eq!(
            tokens.border_radius.get("radius-10").map(String::as_str),
            Some("10px")
        );
    }

    #[test]
    fn test_observed_shadow_tokens_precede_standard_ramp() {
        let mut node = frame("1");
        node.effects = vec![Effect::drop_shadow(
            Vec2::new(0.0, 4.0),
            8.0,
            Rgba::rgba(0.0, 0.0, 0.0, 0.25),
        )];
        let tokens = extract_tokens(&node);
        assert_eq!(
            tokens.shadows.get("shadow-1").map(String::as_str),
            Some("0px 4px 8px 0px rgba(0, 0, 0, 0.25)")
        );
        assert!(tokens.shadows.contains_key("md"));
    }

    #[test]
    fn test_breakpoints_are_constant() {
        let tokens = extract_tokens(&frame("1"));
        assert_eq!(tokens.breakpoints.get("sm").map(String::as_str), Some("640px"));
        assert_eq!(tokens.breakpoints.get("2xl").map(String::as_str), Some("1536px"));
    }
}
