//! Utility-bucket style resolution.
//!
//! Approximates a node's styling as a list of fixed utility-class tokens.
//! Every dimension runs through ascending inclusive-upper-bound buckets;
//! the first matching bucket wins and values above the largest threshold
//! fall into a final auto/full bucket.

use blueprint_core::{DesignNode, EffectKind, NodeKind};

/// Resolve a node into utility class tokens.
pub fn resolve(node: &DesignNode) -> Vec<String> {
    let mut classes: Vec<&str> = Vec::new();

    match node.kind {
        NodeKind::Frame => classes.push("flex"),
        NodeKind::Text => classes.push("text-left"),
        NodeKind::Rectangle => classes.push("block"),
        _ => {}
    }

    if let Some(bounds) = node.bounding_box {
        if bounds.width > 0.0 {
            classes.push(bucket(
                bounds.width,
                &[(100.0, "w-24"), (200.0, "w-48"), (300.0, "w-72"), (400.0, "w-96")],
                "w-full",
            ));
        }
        if bounds.height > 0.0 {
            classes.push(bucket(
                bounds.height,
                &[(50.0, "h-12"), (100.0, "h-24"), (200.0, "h-48"), (300.0, "h-72")],
                "h-auto",
            ));
        }
    }

    if let Some(fill) = node.fills.first() {
        if fill.visible {
            if let Some(color) = fill.color {
                classes.push(background_class(&color.to_hex()));
            }
        }
    }

    if let Some(radius) = node.corner_radius {
        if radius > 0.0 {
            classes.push(bucket(
                radius,
                &[
                    (4.0, "rounded"),
                    (8.0, "rounded-md"),
                    (12.0, "rounded-lg"),
                    (16.0, "rounded-xl"),
                ],
                "rounded-2xl",
            ));
        }
    }

    if node.kind == NodeKind::Text {
        if let Some(style) = &node.text_style {
            classes.push(bucket(
                style.font_size,
                &[
                    (12.0, "text-xs"),
                    (14.0, "text-sm"),
                    (16.0, "text-base"),
                    (18.0, "text-lg"),
                    (20.0, "text-xl"),
                    (24.0, "text-2xl"),
                    (30.0, "text-3xl"),
                ],
                "text-4xl",
            ));
            classes.push(bucket(
                style.font_weight,
                &[
                    (300.0, "font-light"),
                    (400.0, "font-normal"),
                    (500.0, "font-medium"),
                    (600.0, "font-semibold"),
                    (700.0, "font-bold"),
                ],
                "font-extrabold",
            ));
        }
    }

    if node
        .effects
        .iter()
        .any(|e| e.kind == EffectKind::DropShadow && e.visible)
    {
        classes.push("shadow-md");
    }

    if node.kind == NodeKind::Frame && !node.children.is_empty() {
        classes.push("p-4");
    }

    classes.into_iter().map(str::to_string).collect()
}

/// First bucket whose inclusive upper bound covers `value`, else the
/// overflow class.
fn bucket(value: f64, buckets: &[(f64, &'static str)], overflow: &'static str) -> &'static str {
    buckets
        .iter()
        .find(|(max, _)| value <= *max)
        .map(|(_, class)| *class)
        .unwrap_or(overflow)
}

/// Fixed background-color class table; unmatched colors land on gray.
fn background_class(hex: &str) -> &'static str {
    match hex {
        "#000000" => "bg-black",
        "#ffffff" => "bg-white",
        "#f3f4f6" => "bg-gray-100",
        "#e5e7eb" => "bg-gray-200",
        "#3b82f6" => "bg-blue-500",
        "#ef4444" => "bg-red-500",
        "#10b981" => "bg-green-500",
        "#f59e0b" => "bg-yellow-500",
        "#8b5cf6" => "bg-purple-500",
        _ => "bg-gray-500",
    }
}
