//! Source-body assembly.
//!
//! Every generated component body has the same section order: import
//! lines, parameter contract (only when parameters exist), style
//! declaration block (exact strategy only), then the definition returning
//! the markup tree.

use crate::markup::MarkupNode;
use crate::model::ComponentProp;
use crate::style::NodeStyle;

/// Assemble a complete component source body.
pub fn component_source(
    name: &str,
    props: &[ComponentProp],
    style: &NodeStyle,
    markup: &MarkupNode,
) -> String {
    let mut sections: Vec<String> = vec![imports(style)];

    if !props.is_empty() {
        sections.push(props_interface(name, props));
    }

    if let NodeStyle::Declarations(record) = style {
        if !record.is_empty() {
            sections.push(format!("const styles = css`\n{}\n`;", record.to_css_lines()));
        }
    }

    sections.push(component_function(name, props, markup));
    sections.join("\n\n")
}

fn imports(style: &NodeStyle) -> String {
    let mut lines = vec!["import React from 'react';".to_string()];
    match style {
        NodeStyle::Declarations(record) if !record.is_empty() => {
            lines.push("import { css } from '@emotion/react';".to_string());
        }
        NodeStyle::Declarations(_) => {}
        NodeStyle::Classes(_) => {
            lines.push("import { cn } from '@/lib/utils';".to_string());
        }
    }
    lines.join("\n")
}

/// The parameter contract, rendered as a TypeScript props interface.
fn props_interface(name: &str, props: &[ComponentProp]) -> String {
    let mut lines = vec![format!("interface {name}Props {{")];
    for prop in props {
        if let Some(description) = &prop.description {
            lines.push(format!("  /** {description} */"));
        }
        let optional = if prop.required { "" } else { "?" };
        lines.push(format!("  {}{optional}: {};", prop.name, prop.prop_type));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn component_function(name: &str, props: &[ComponentProp], markup: &MarkupNode) -> String {
    let params = if props.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        format!("{{ {} }}: {name}Props", names.join(", "))
    };

    format!(
        "export function {name}({params}) {{\n  return (\n{}\n  );\n}}",
        markup.render(4)
    )
}

/// Escape a string for embedding in a double-quoted source literal.
pub fn quote_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRecord;

    fn sample_props() -> Vec<ComponentProp> {
        vec![
            ComponentProp::optional("className", "string", "Additional CSS classes"),
            ComponentProp::optional("style", "React.CSSProperties", "Inline style overrides"),
        ]
    }

    #[test]
    fn test_section_order_exact() {
        let mut record = StyleRecord::new();
        record.set("display", "flex");
        let style = NodeStyle::Declarations(record);
        let markup = MarkupNode::new("div").expr_attr("css", "styles");

        let code = component_source("Card", &sample_props(), &style, &markup);
        let imports_at = code.find("import React").unwrap();
        let contract_at = code.find("interface CardProps").unwrap();
        let styles_at = code.find("const styles = css`").unwrap();
        let function_at = code.find("export function Card(").unwrap();
        assert!(imports_at < contract_at);
        assert!(contract_at < styles_at);
        assert!(styles_at < function_at);
        assert!(code.contains("import { css } from '@emotion/react';"));
        assert!(code.contains("  display: flex;"));
    }

    #[test]
    fn test_no_contract_without_props() {
        let style = NodeStyle::Declarations(StyleRecord::new());
        let markup = MarkupNode::new("div");
        let code = component_source("Card", &[], &style, &markup);
        assert!(!code.contains("interface"));
        assert!(code.contains("export function Card() {"));
    }

    #[test]
    fn test_utility_imports_cn() {
        let style = NodeStyle::Classes(vec!["flex".into()]);
        let markup = MarkupNode::new("div");
        let code = component_source("Card", &sample_props(), &style, &markup);
        assert!(code.contains("import { cn } from '@/lib/utils';"));
        assert!(!code.contains("@emotion/react"));
        assert!(!code.contains("const styles"));
    }

    #[test]
    fn test_props_interface_docs_and_optionality() {
        let props = vec![
            ComponentProp::optional("children", "React.ReactNode", "Text content")
                .with_default("\"Hello\""),
        ];
        let text = props_interface("Label", &props);
        assert_eq!(
            text,
            "interface LabelProps {\n  /** Text content */\n  children?: React.ReactNode;\n}"
        );
    }

    #[test]
    fn test_quote_js_escapes() {
        assert_eq!(quote_js("say \"hi\"\\now"), "say \\\"hi\\\"\\\\now");
        assert_eq!(quote_js("line\nbreak"), "line\\nbreak");
    }
}
