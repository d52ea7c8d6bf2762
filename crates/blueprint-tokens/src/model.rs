//! The extracted token catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The normalized design-token catalog, built once per conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// Token name → hex color.
    pub colors: IndexMap<String, String>,
    /// Token name → typography record.
    pub typography: IndexMap<String, TypeToken>,
    /// Scale key → pixel value.
    pub spacing: IndexMap<String, String>,
    /// Scale key → pixel value.
    pub border_radius: IndexMap<String, String>,
    /// Token name → shadow declaration.
    pub shadows: IndexMap<String, String>,
    /// Viewport name → min width.
    pub breakpoints: IndexMap<String, String>,
}

impl DesignTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A typography token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeToken {
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}
