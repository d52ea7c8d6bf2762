//! Token catalog emission.
//!
//! Two project-level renderings of the catalog: a `:root` custom-property
//! stylesheet for the exact style strategy, and a utility-framework config
//! module for the bucketed strategy.

use serde_json::json;

use crate::model::DesignTokens;

/// Render the catalog as a `:root { --… }` custom-property stylesheet.
pub fn tokens_to_css(tokens: &DesignTokens) -> String {
    let mut css = String::from(":root {\n");

    for (name, value) in &tokens.colors {
        css.push_str(&format!("  --{name}: {value};\n"));
    }

    for (name, token) in &tokens.typography {
        css.push_str(&format!("  --{name}-font-size: {};\n", token.font_size));
        css.push_str(&format!("  --{name}-font-weight: {};\n", token.font_weight));
        css.push_str(&format!("  --{name}-line-height: {};\n", token.line_height));
        css.push_str(&format!("  --{name}-font-family: {};\n", token.font_family));
        if let Some(letter_spacing) = &token.letter_spacing {
            css.push_str(&format!("  --{name}-letter-spacing: {letter_spacing};\n"));
        }
    }

    for (name, value) in &tokens.spacing {
        css.push_str(&format!("  --spacing-{name}: {value};\n"));
    }
    for (name, value) in &tokens.border_radius {
        css.push_str(&format!("  --border-radius-{name}: {value};\n"));
    }
    for (name, value) in &tokens.shadows {
        css.push_str(&format!("  --shadow-{name}: {value};\n"));
    }

    css.push('}');
    css
}

/// Render the catalog as a utility-framework config module.
pub fn tokens_to_utility_config(tokens: &DesignTokens) -> String {
    let font_size = tokens
        .typography
        .iter()
        .map(|(name, token)| {
            (
                name.clone(),
                json!([
                    token.font_size,
                    { "lineHeight": token.line_height, "fontWeight": token.font_weight }
                ]),
            )
        })
        .collect::<serde_json::Map<_, _>>();

    let pretty = |value: &serde_json::Value| {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    };

    format!(
        r#"module.exports = {{
  content: [
    "./index.html",
    "./src/**/*.{{js,ts,jsx,tsx}}",
  ],
  theme: {{
    extend: {{
      colors: {colors},
      fontFamily: {{
        sans: ['Inter', 'ui-sans-serif', 'system-ui', '-apple-system', 'sans-serif'],
      }},
      fontSize: {font_size},
      spacing: {spacing},
      borderRadius: {radius},
      boxShadow: {shadows},
      screens: {screens},
    }},
  }},
  plugins: [],
}}"#,
        colors = pretty(&json!(tokens.colors)),
        font_size = pretty(&serde_json::Value::Object(font_size)),
        spacing = pretty(&json!(tokens.spacing)),
        radius = pretty(&json!(tokens.border_radius)),
        shadows = pretty(&json!(tokens.shadows)),
        screens = pretty(&json!(tokens.breakpoints)),
    )
}
