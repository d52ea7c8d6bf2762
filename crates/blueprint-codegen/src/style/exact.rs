//! Exact style resolution.
//!
//! Each rule is evaluated independently and merged into the record in a
//! fixed order; later rules win on conflicting keys. The visibility rule
//! runs last so `display: none` overrides any flex display from layout.

use blueprint_core::{
    css_variable_name, DesignNode, Effect, EffectKind, LayoutMode, NodeKind, Paint, PaintKind,
    StyleCatalog, TypeStyle,
};

use crate::error::{ConvertError, Result};
use crate::style::StyleRecord;

/// Resolve a node's attribute set into exact declarations.
pub fn resolve(node: &DesignNode, catalog: &StyleCatalog) -> Result<StyleRecord> {
    let mut record = StyleRecord::new();

    resolve_layout(node, &mut record);
    resolve_size(node, &mut record);
    resolve_fill(node, catalog, &mut record)?;
    resolve_stroke(node, &mut record);
    resolve_corner_radius(node, &mut record);
    resolve_effects(node, &mut record);
    if node.kind == NodeKind::Text {
        if let Some(style) = &node.text_style {
            resolve_typography(style, &mut record);
        }
    }

    if let Some(opacity) = node.opacity {
        if opacity != 1.0 {
            record.set("opacity", format!("{opacity}"));
        }
    }

    // Last so it beats any display from the layout rule.
    if !node.visible {
        record.set("display", "none");
    }

    Ok(record)
}

fn resolve_layout(node: &DesignNode, record: &mut StyleRecord) {
    let layout = &node.layout;
    if layout.mode == LayoutMode::None {
        return;
    }

    record.set("display", "flex");
    record.set(
        "flexDirection",
        match layout.mode {
            LayoutMode::Horizontal => "row",
            LayoutMode::Vertical => "column",
            LayoutMode::None => unreachable!(),
        },
    );

    if let Some(spacing) = layout.item_spacing {
        record.set("gap", format!("{spacing}px"));
    }

    let padding = &layout.padding;
    if let Some(top) = padding.top {
        record.set("paddingTop", format!("{top}px"));
    }
    if let Some(right) = padding.right {
        record.set("paddingRight", format!("{right}px"));
    }
    if let Some(bottom) = padding.bottom {
        record.set("paddingBottom", format!("{bottom}px"));
    }
    if let Some(left) = padding.left {
        record.set("paddingLeft", format!("{left}px"));
    }

    if let Some(align) = layout.primary_axis_align {
        record.set("justifyContent", align.to_css());
    }
    if let Some(align) = layout.counter_axis_align {
        record.set("alignItems", align.to_css());
    }
}

fn resolve_size(node: &DesignNode, record: &mut StyleRecord) {
    if let Some(bounds) = node.bounding_box {
        if bounds.width > 0.0 {
            record.set("width", format!("{}px", bounds.width));
        }
        if bounds.height > 0.0 {
            record.set("height", format!("{}px", bounds.height));
        }
    }
}

fn resolve_fill(node: &DesignNode, catalog: &StyleCatalog, record: &mut StyleRecord) -> Result<()> {
    let Some(fill) = primary_fill(node) else {
        return Ok(());
    };
    // The fallback fill can itself be invisible; it emits nothing.
    if !fill.visible {
        return Ok(());
    }

    // A catalog-named fill becomes a variable reference regardless of its
    // paint kind.
    if let Some(style_id) = &node.fill_style_id {
        if let Some(style_name) = catalog.get(style_id) {
            let reference = format!("var({})", css_variable_name(style_name));
            set_background(record, fill, reference);
            return Ok(());
        }
    }

    let value = match fill.kind {
        PaintKind::Solid => fill.color.map(|c| c.to_css()),
        PaintKind::GradientLinear => Some(linear_gradient_css(node, fill)?),
        PaintKind::GradientRadial => Some(radial_gradient_css(node, fill)?),
        PaintKind::Image => fill.image_ref.as_ref().map(|r| format!("url({r})")),
        // Angular and diamond gradients have no stylesheet counterpart.
        PaintKind::GradientAngular | PaintKind::GradientDiamond => None,
    };

    if let Some(value) = value {
        set_background(record, fill, value);
    }
    Ok(())
}

/// First fill flagged visible, else the first fill.
fn primary_fill(node: &DesignNode) -> Option<&Paint> {
    node.fills
        .iter()
        .find(|f| f.visible)
        .or_else(|| node.fills.first())
}

fn set_background(record: &mut StyleRecord, fill: &Paint, value: String) {
    if fill.kind == PaintKind::Solid {
        record.set("backgroundColor", value);
    } else {
        record.set("background", value);
    }
}

fn linear_gradient_css(node: &DesignNode, fill: &Paint) -> Result<String> {
    if fill.gradient_stops.is_empty() {
        return Err(ConvertError::MalformedGradient {
            node: node.id.clone(),
            reason: "linear gradient has no color stops".into(),
        });
    }
    if fill.gradient_handles.len() < 2 {
        return Err(ConvertError::MalformedGradient {
            node: node.id.clone(),
            reason: "linear gradient has no handle positions".into(),
        });
    }

    let angle = gradient_angle(&fill.gradient_handles);
    Ok(format!(
        "linear-gradient({angle}deg, {})",
        gradient_stops_css(fill)
    ))
}

fn radial_gradient_css(node: &DesignNode, fill: &Paint) -> Result<String> {
    if fill.gradient_stops.is_empty() {
        return Err(ConvertError::MalformedGradient {
            node: node.id.clone(),
            reason: "radial gradient has no color stops".into(),
        });
    }
    Ok(format!("radial-gradient(circle, {})", gradient_stops_css(fill)))
}

fn gradient_stops_css(fill: &Paint) -> String {
    fill.gradient_stops
        .iter()
        .map(|stop| format!("{} {:.1}%", stop.color.to_css(), stop.position * 100.0))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Angle of the start→end handle vector: `atan2(Δy, Δx)` in degrees, +90°,
/// wrapped to [0, 360), rounded to whole degrees.
pub fn gradient_angle(handles: &[blueprint_core::Vec2]) -> i64 {
    if handles.len() < 2 {
        return 0;
    }
    let (start, end) = (handles[0], handles[1]);
    let angle = (end.y - start.y).atan2(end.x - start.x).to_degrees() + 90.0;
    angle.rem_euclid(360.0).round() as i64
}

fn resolve_stroke(node: &DesignNode, record: &mut StyleRecord) {
    // Only the first visible stroke; additional strokes have no border
    // counterpart and are dropped.
    let Some(stroke) = node.strokes.iter().find(|s| s.visible) else {
        return;
    };
    if let Some(color) = stroke.color {
        let thickness = stroke.thickness.unwrap_or(1.0);
        record.set("border", format!("{thickness}px solid {}", color.to_css()));
    }
}

fn resolve_corner_radius(node: &DesignNode, record: &mut StyleRecord) {
    if let Some(radius) = node.corner_radius {
        if radius > 0.0 {
            record.set("borderRadius", format!("{radius}px"));
            return;
        }
    }
    if let Some([top_left, top_right, bottom_right, bottom_left]) = node.corner_radii {
        record.set(
            "borderRadius",
            format!("{top_left}px {top_right}px {bottom_right}px {bottom_left}px"),
        );
    }
}

fn resolve_effects(node: &DesignNode, record: &mut StyleRecord) {
    let shadows: Vec<String> = node
        .effects
        .iter()
        .filter(|e| e.visible)
        .filter_map(effect_css)
        .collect();
    if !shadows.is_empty() {
        record.set("boxShadow", shadows.join(", "));
    }
}

fn effect_css(effect: &Effect) -> Option<String> {
    let color = effect.color?;
    match effect.kind {
        EffectKind::DropShadow | EffectKind::InnerShadow => {
            let offset = effect.offset.unwrap_or_default();
            let blur = effect.radius.unwrap_or(0.0);
            let spread = effect.spread.unwrap_or(0.0);
            let inset = if effect.kind == EffectKind::InnerShadow {
                "inset "
            } else {
                ""
            };
            Some(format!(
                "{inset}{}px {}px {blur}px {spread}px {}",
                offset.x,
                offset.y,
                color.to_css()
            ))
        }
        // Blur effects have no box-shadow counterpart.
        EffectKind::LayerBlur | EffectKind::BackgroundBlur => None,
    }
}

fn resolve_typography(style: &TypeStyle, record: &mut StyleRecord) {
    record.set("fontFamily", format!("\"{}\", sans-serif", style.font_family));
    record.set("fontSize", format!("{}px", style.font_size));
    record.set("fontWeight", format!("{}", style.font_weight));

    if let Some(px) = style.line_height_px {
        record.set("lineHeight", format!("{px}px"));
    } else if let Some(percent) = style.line_height_percent {
        record.set("lineHeight", format!("{percent}%"));
    }

    if let Some(spacing) = style.letter_spacing {
        if spacing != 0.0 {
            record.set("letterSpacing", format!("{spacing}px"));
        }
    }

    if let Some(align) = style.text_align_horizontal {
        record.set("textAlign", align.to_css());
    }
    if let Some(decoration) = &style.text_decoration {
        record.set("textDecoration", decoration.to_lowercase());
    }
    if let Some(transform) = style.text_case.and_then(|c| c.to_css()) {
        record.set("textTransform", transform);
    }
}
