//! The design-document node tree.
//!
//! A document arrives as a single tree of [`DesignNode`]s. Children are
//! owned exclusively by their parent; instance nodes point at their master
//! through a plain id (`master_id`) that is resolved against an id-keyed
//! index, never through a pointer graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{GradientStop, Rect, Rgba, TypeStyle, Vec2};

/// Node kind. Closed enumeration; unrecognized kinds deserialize to
/// [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    Instance,
    Text,
    Vector,
    BooleanOperation,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    #[serde(other)]
    Other,
}

/// One element of the hierarchical design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    #[serde(default)]
    pub bounding_box: Option<Rect>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub layout: AutoLayout,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub text_style: Option<TypeStyle>,
    /// Named-style reference for the fill, resolved via the style catalog.
    #[serde(default)]
    pub fill_style_id: Option<String>,
    /// Named-style reference for the typography.
    #[serde(default)]
    pub text_style_id: Option<String>,
    /// Non-owning reference to a master component node, by id.
    #[serde(default)]
    pub master_id: Option<String>,
    /// Per-instance overrides, keyed by the overridden node id.
    #[serde(default)]
    pub overrides: IndexMap<String, OverrideValue>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    /// Four distinct radii: top-left, top-right, bottom-right, bottom-left.
    #[serde(default)]
    pub corner_radii: Option<[f64; 4]>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl DesignNode {
    /// Create a bare node with the given identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            bounding_box: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            layout: AutoLayout::default(),
            characters: None,
            text_style: None,
            fill_style_id: None,
            text_style_id: None,
            master_id: None,
            overrides: IndexMap::new(),
            corner_radius: None,
            corner_radii: None,
            opacity: None,
            visible: true,
        }
    }

    /// Append a child node.
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the bounding box.
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounding_box = Some(Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        self
    }

    /// Mark the node hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A fill paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Start/end handles for gradient paints.
    #[serde(default)]
    pub gradient_handles: Vec<Vec2>,
    #[serde(default)]
    pub gradient_stops: Vec<GradientStop>,
    /// Reference to an external image, for image paints.
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Paint {
    /// A solid paint in the given color.
    pub fn solid(color: Rgba) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            opacity: None,
            visible: true,
            gradient_handles: Vec::new(),
            gradient_stops: Vec::new(),
            image_ref: None,
        }
    }

    /// A linear gradient between two handles.
    pub fn linear_gradient(start: Vec2, end: Vec2, stops: Vec<GradientStop>) -> Self {
        Self {
            kind: PaintKind::GradientLinear,
            color: None,
            opacity: None,
            visible: true,
            gradient_handles: vec![start, end],
            gradient_stops: stops,
            image_ref: None,
        }
    }
}

/// Paint kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
}

/// A stroke paint. Only the first visible stroke contributes to output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub thickness: Option<f64>,
}

impl Stroke {
    pub fn solid(color: Rgba, thickness: f64) -> Self {
        Self {
            color: Some(color),
            visible: true,
            thickness: Some(thickness),
        }
    }
}

/// A visual effect attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub kind: EffectKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Blur radius.
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub offset: Option<Vec2>,
    #[serde(default)]
    pub spread: Option<f64>,
}

impl Effect {
    /// A drop shadow with the given geometry.
    pub fn drop_shadow(offset: Vec2, radius: f64, color: Rgba) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            visible: true,
            radius: Some(radius),
            color: Some(color),
            offset: Some(offset),
            spread: None,
        }
    }
}

/// Effect kind. Blur kinds have no stylesheet counterpart and are dropped
/// during style resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

/// Declarative flex-like layout attributes of a container node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    #[serde(default)]
    pub mode: LayoutMode,
    #[serde(default)]
    pub item_spacing: Option<f64>,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub primary_axis_align: Option<PrimaryAxisAlign>,
    #[serde(default)]
    pub counter_axis_align: Option<CounterAxisAlign>,
}

impl AutoLayout {
    /// A horizontal layout with the given item spacing.
    pub fn horizontal(item_spacing: f64) -> Self {
        Self {
            mode: LayoutMode::Horizontal,
            item_spacing: Some(item_spacing),
            ..Self::default()
        }
    }

    /// A vertical layout with the given item spacing.
    pub fn vertical(item_spacing: f64) -> Self {
        Self {
            mode: LayoutMode::Vertical,
            item_spacing: Some(item_spacing),
            ..Self::default()
        }
    }
}

/// Auto-layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Four-sided padding. Absent sides emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
}

/// Alignment along the layout's primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

impl PrimaryAxisAlign {
    /// The CSS `justify-content` keyword.
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Min => "flex-start",
            Self::Center => "center",
            Self::Max => "flex-end",
            Self::SpaceBetween => "space-between",
        }
    }
}

/// Alignment along the layout's counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
}

impl CounterAxisAlign {
    /// The CSS `align-items` keyword.
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Min => "flex-start",
            Self::Center => "center",
            Self::Max => "flex-end",
        }
    }
}

/// A per-instance override value. Only plain-text overrides participate in
/// instance synthesis; the other kinds are surfaced as warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Toggle(bool),
    Number(f64),
    Text(String),
    Structured(serde_json::Value),
}
