//! Output models for a conversion run.

use serde::{Deserialize, Serialize};

use blueprint_tokens::DesignTokens;

/// A parameter of a generated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProp {
    pub name: String,
    /// Declared type in the target language.
    pub prop_type: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentProp {
    /// An optional prop with no default.
    pub fn optional(
        name: impl Into<String>,
        prop_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            required: false,
            default_value: None,
            description: Some(description.into()),
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

/// One synthesized, self-contained component source artifact. Built once by
/// the synthesizer and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    /// Unique within a conversion result.
    pub name: String,
    /// Full source body: imports, parameter contract, style block, definition.
    pub code: String,
    pub props: Vec<ComponentProp>,
    /// Style representation: declaration object literal (exact strategy) or
    /// utility class tokens (bucket strategy).
    pub styles: String,
    /// Whether this artifact came from a reusable-component master.
    pub is_main_component: bool,
    /// Whether this artifact is the conversion root.
    pub is_top_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook: Option<String>,
}

/// A project-level asset emitted in full-project mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Terminal output of a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    pub components: Vec<GeneratedComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_tokens: Option<DesignTokens>,
    pub assets: Vec<GeneratedAsset>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConversionResult {
    /// The failure shape: no partial output, one error message, no warnings.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            components: Vec::new(),
            design_tokens: None,
            assets: Vec::new(),
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }
}
