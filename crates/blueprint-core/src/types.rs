//! Core value types for design documents.

use serde::{Deserialize, Serialize};

/// A color with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit channel values.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Lowercase hex string, alpha ignored (e.g. `#3b82f6`).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS color string: `rgb(...)` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a == 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.a)
        }
    }

    /// CSS color string in the always-`rgba(...)` form.
    pub fn to_css_rgba(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A 2D point, used for gradient handles and effect offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A color stop in a gradient paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub position: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Typography attributes of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: f64,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub line_height_percent: Option<f64>,
    #[serde(default)]
    pub text_align_horizontal: Option<TextAlign>,
    #[serde(default)]
    pub text_decoration: Option<String>,
    #[serde(default)]
    pub text_case: Option<TextCase>,
}

impl TypeStyle {
    /// A plain style at the given pixel size.
    pub fn sized(family: impl Into<String>, size: f64, weight: f64) -> Self {
        Self {
            font_family: family.into(),
            font_size: size,
            font_weight: weight,
            letter_spacing: None,
            line_height_px: None,
            line_height_percent: None,
            text_align_horizontal: None,
            text_decoration: None,
            text_case: None,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justified,
}

impl TextAlign {
    /// The CSS `text-align` keyword.
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justified => "justify",
        }
    }
}

/// Letter-case transformation applied to text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
}

impl TextCase {
    /// The CSS `text-transform` keyword, if any.
    pub fn to_css(&self) -> Option<&'static str> {
        match self {
            Self::Original => None,
            Self::Upper => Some("uppercase"),
            Self::Lower => Some("lowercase"),
            Self::Title => Some("capitalize"),
        }
    }
}
