//! Conversion options.

use serde::{Deserialize, Serialize};

/// Options consumed by a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Casing applied to generated component names.
    pub component_naming: NamingConvention,
    /// Casing applied to generated parameter names.
    pub prop_naming: PropNaming,
    /// Emit unit-test text alongside each component.
    pub generate_tests: bool,
    /// Emit story text alongside each component.
    pub generate_storybook: bool,
    /// Run the design-token extraction pass.
    pub extract_design_tokens: bool,
    /// Declared but not implemented; accepted for compatibility.
    pub optimize_assets: bool,
    /// Add role/tabIndex/aria-label attributes where applicable.
    pub include_accessibility: bool,
    /// Style resolution strategy.
    pub style_strategy: StyleStrategy,
    /// Output assembly mode.
    pub output_format: OutputFormat,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            component_naming: NamingConvention::Pascal,
            prop_naming: PropNaming::Camel,
            generate_tests: false,
            generate_storybook: false,
            extract_design_tokens: true,
            optimize_assets: true,
            include_accessibility: true,
            style_strategy: StyleStrategy::Exact,
            output_format: OutputFormat::Components,
        }
    }
}

/// Identifier casing for component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    #[default]
    Pascal,
    Camel,
    Kebab,
}

/// Identifier casing for parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropNaming {
    #[default]
    Camel,
    Snake,
}

/// Style resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleStrategy {
    /// Exact computed declarations.
    #[default]
    Exact,
    /// Threshold-bucketed utility-class tokens.
    UtilityBucket,
}

/// Output assembly mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Component artifacts only.
    #[default]
    Components,
    /// Components plus project-level assets (token stylesheet or
    /// utility-framework config).
    FullProject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.component_naming, NamingConvention::Pascal);
        assert_eq!(options.style_strategy, StyleStrategy::Exact);
        assert!(options.extract_design_tokens);
        assert!(!options.generate_tests);
    }

    #[test]
    fn test_option_wire_names() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{"componentNaming":"kebab","styleStrategy":"utility-bucket"}"#)
                .unwrap();
        assert_eq!(options.component_naming, NamingConvention::Kebab);
        assert_eq!(options.style_strategy, StyleStrategy::UtilityBucket);
    }
}
