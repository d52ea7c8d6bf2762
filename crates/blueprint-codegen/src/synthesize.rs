//! The component synthesizer.
//!
//! Walks the node tree depth-first, dispatching on node kind, and returns
//! `(own artifact, descendant artifacts)` from every call; callers
//! concatenate, so the final list carries each subtree before its parent
//! and no accumulator is shared across runs. All run-scoped state (name
//! counter, master index, warnings) lives on the synthesizer instance,
//! which is built fresh per conversion.

use std::collections::HashMap;

use blueprint_core::{
    ConvertOptions, DesignNode, EffectKind, NodeKind, OverrideValue, StyleCatalog, StyleStrategy,
};

use crate::emit::{self, quote_js};
use crate::error::Result;
use crate::markup::MarkupNode;
use crate::model::{ComponentProp, GeneratedComponent};
use crate::naming::{prop_name, NameAllocator};
use crate::style::{exact, utility, NodeStyle};
use crate::templates::TemplateEngine;

/// Per-run synthesis context.
pub struct Synthesizer<'a> {
    options: &'a ConvertOptions,
    catalog: &'a StyleCatalog,
    masters: HashMap<&'a str, &'a DesignNode>,
    names: NameAllocator,
    engine: TemplateEngine<'a>,
    warnings: Vec<String>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        options: &'a ConvertOptions,
        catalog: &'a StyleCatalog,
        masters: HashMap<&'a str, &'a DesignNode>,
    ) -> Result<Self> {
        Ok(Self {
            options,
            catalog,
            masters,
            names: NameAllocator::new(),
            engine: TemplateEngine::new()?,
            warnings: Vec::new(),
        })
    }

    /// Degradation notes accumulated during the run.
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// Synthesize one node. Returns the node's own artifact and the
    /// artifacts of its visible descendants, depth-first.
    pub fn synthesize(
        &mut self,
        node: &'a DesignNode,
        top_level: bool,
    ) -> Result<(GeneratedComponent, Vec<GeneratedComponent>)> {
        let name = self.names.allocate(&node.name, self.options.component_naming);
        match node.kind {
            NodeKind::Component => self.container(node, name, true, top_level),
            NodeKind::Instance => self.instance(node, name, top_level),
            NodeKind::Frame | NodeKind::Group => self.container(node, name, false, top_level),
            NodeKind::Text => self.text(node, name, top_level),
            NodeKind::Vector | NodeKind::BooleanOperation => self.vector(node, name, top_level),
            NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Other => self.container(node, name, false, top_level),
        }
    }

    fn container(
        &mut self,
        node: &'a DesignNode,
        name: String,
        is_main: bool,
        top_level: bool,
    ) -> Result<(GeneratedComponent, Vec<GeneratedComponent>)> {
        let props = self.standard_props(node);
        let style = self.resolve_style(node)?;
        let tag = if is_interactive(node) { "button" } else { "div" };
        let mut markup = self.element_markup(node, tag, &style, &props);

        let mut descendants = Vec::new();
        for child in node.children.iter().filter(|c| c.visible) {
            let (own, mut subtree) = self.synthesize(child, false)?;
            descendants.append(&mut subtree);
            // Structural reference only; no parameters cross the boundary.
            markup = markup.child(MarkupNode::new(own.name.clone()));
            descendants.push(own);
        }

        let component = self.assemble(name, props, style, markup, is_main, top_level)?;
        Ok((component, descendants))
    }

    fn text(
        &mut self,
        node: &'a DesignNode,
        name: String,
        top_level: bool,
    ) -> Result<(GeneratedComponent, Vec<GeneratedComponent>)> {
        let props = self.standard_props(node);
        let style = self.resolve_style(node)?;
        let content = quote_js(node.characters.as_deref().unwrap_or(""));
        let markup = self
            .element_markup(node, text_tag(node), &style, &props)
            .expr_child(format!("children || \"{content}\""));

        let component = self.assemble(name, props, style, markup, false, top_level)?;
        Ok((component, Vec::new()))
    }

    fn vector(
        &mut self,
        node: &'a DesignNode,
        name: String,
        top_level: bool,
    ) -> Result<(GeneratedComponent, Vec<GeneratedComponent>)> {
        let props = self.standard_props(node);
        let style = self.resolve_style(node)?;

        let (width, height) = node
            .bounding_box
            .map(|b| (b.width, b.height))
            .unwrap_or((24.0, 24.0));
        self.warnings.push(format!(
            "Vector geometry of '{}' is not translated; a placeholder shape was emitted",
            node.name
        ));

        let markup = self
            .element_markup(node, "svg", &style, &props)
            .attr("width", format!("{width}"))
            .attr("height", format!("{height}"))
            .attr("viewBox", format!("0 0 {width} {height}"))
            .child(
                MarkupNode::new("rect")
                    .attr("width", format!("{width}"))
                    .attr("height", format!("{height}"))
                    .attr("fill", "currentColor")
                    .attr("opacity", "0.1"),
            );

        let component = self.assemble(name, props, style, markup, false, top_level)?;
        Ok((component, Vec::new()))
    }

    fn instance(
        &mut self,
        node: &'a DesignNode,
        name: String,
        top_level: bool,
    ) -> Result<(GeneratedComponent, Vec<GeneratedComponent>)> {
        let master = node
            .master_id
            .as_deref()
            .and_then(|id| self.masters.get(id).copied());
        let Some(master) = master else {
            self.warnings.push(format!(
                "Instance '{}' references an unresolved master; rendered as a plain container",
                node.name
            ));
            return self.container(node, name, false, top_level);
        };

        let master_name = self
            .names
            .allocate(&master.name, self.options.component_naming);

        let mut props = Vec::new();
        for (key, value) in &node.overrides {
            match value {
                OverrideValue::Text(text) if props.is_empty() => {
                    props.push(
                        ComponentProp::optional(
                            self.prop("text"),
                            "string",
                            "Text content override",
                        )
                        .with_default(format!("\"{}\"", quote_js(text))),
                    );
                }
                OverrideValue::Text(_) => self.warnings.push(format!(
                    "Additional text override '{key}' on instance '{}' ignored",
                    node.name
                )),
                _ => self.warnings.push(format!(
                    "Override '{key}' on instance '{}' has an unsupported kind; ignored",
                    node.name
                )),
            }
        }

        let mut markup = MarkupNode::new(master_name);
        if let Some(text_prop) = props.first() {
            markup = markup.expr_attr("text", text_prop.name.clone());
        }

        let style = self.empty_style();
        let component = self.assemble(name, props, style, markup, false, top_level)?;
        Ok((component, Vec::new()))
    }

    /// Resolve the node's style under the configured strategy, recording
    /// declarations that have no stylesheet counterpart.
    fn resolve_style(&mut self, node: &DesignNode) -> Result<NodeStyle> {
        for effect in &node.effects {
            if effect.visible
                && matches!(effect.kind, EffectKind::LayerBlur | EffectKind::BackgroundBlur)
            {
                self.warnings.push(format!(
                    "Effect kind {:?} on '{}' has no stylesheet counterpart; dropped",
                    effect.kind, node.name
                ));
            }
        }

        match self.options.style_strategy {
            StyleStrategy::Exact => Ok(NodeStyle::Declarations(exact::resolve(
                node,
                self.catalog,
            )?)),
            StyleStrategy::UtilityBucket => Ok(NodeStyle::Classes(utility::resolve(node))),
        }
    }

    fn empty_style(&self) -> NodeStyle {
        match self.options.style_strategy {
            StyleStrategy::Exact => NodeStyle::Declarations(Default::default()),
            StyleStrategy::UtilityBucket => NodeStyle::Classes(Vec::new()),
        }
    }

    /// The standard parameter set shared by every non-instance path.
    fn standard_props(&self, node: &DesignNode) -> Vec<ComponentProp> {
        let mut props = Vec::new();

        if !node.visible {
            props.push(
                ComponentProp::optional(
                    self.prop("hidden"),
                    "boolean",
                    "Whether the component is hidden",
                )
                .with_default("false"),
            );
        }

        if node.kind == NodeKind::Text {
            let content = quote_js(node.characters.as_deref().unwrap_or(""));
            props.push(
                ComponentProp::optional("children", "React.ReactNode", "Text content")
                    .with_default(format!("\"{content}\"")),
            );
        }

        props.push(ComponentProp::optional(
            self.prop("className"),
            "string",
            "Additional CSS classes",
        ));
        props.push(ComponentProp::optional(
            self.prop("style"),
            "React.CSSProperties",
            "Inline style overrides",
        ));

        if is_interactive(node) {
            props.push(ComponentProp::optional(
                self.prop("onClick"),
                "() => void",
                "Click handler",
            ));
        }

        props
    }

    /// Build the node's own markup element with style, prop, and
    /// accessibility attributes wired in.
    fn element_markup(
        &self,
        node: &DesignNode,
        tag: &str,
        style: &NodeStyle,
        props: &[ComponentProp],
    ) -> MarkupNode {
        let mut markup = MarkupNode::new(tag);
        let class_prop = self.prop("className");

        match style {
            NodeStyle::Declarations(record) => {
                if !record.is_empty() {
                    markup = markup.expr_attr("css", "styles");
                }
                markup = markup
                    .expr_attr("className", class_prop)
                    .expr_attr("style", self.prop("style"));
            }
            NodeStyle::Classes(classes) => {
                if classes.is_empty() {
                    markup = markup.expr_attr("className", class_prop);
                } else {
                    markup = markup.expr_attr(
                        "className",
                        format!("cn(\"{}\", {class_prop})", classes.join(" ")),
                    );
                }
                markup = markup.expr_attr("style", self.prop("style"));
            }
        }

        if is_interactive(node) {
            markup = markup.expr_attr("onClick", self.prop("onClick"));
        }
        if props.iter().any(|p| p.name == self.prop("hidden")) {
            markup = markup.expr_attr("hidden", self.prop("hidden"));
        }

        if self.options.include_accessibility {
            if is_interactive(node) {
                markup = markup.attr("role", "button").expr_attr("tabIndex", "0");
            }
            if node.kind == NodeKind::Text {
                if let Some(characters) = &node.characters {
                    markup = markup.attr("aria-label", quote_js(characters));
                }
            }
        }

        markup
    }

    fn assemble(
        &self,
        name: String,
        props: Vec<ComponentProp>,
        style: NodeStyle,
        markup: MarkupNode,
        is_main: bool,
        top_level: bool,
    ) -> Result<GeneratedComponent> {
        let code = emit::component_source(&name, &props, &style, &markup);
        let tests = if self.options.generate_tests {
            Some(self.engine.tests_for(&name)?)
        } else {
            None
        };
        let storybook = if self.options.generate_storybook {
            Some(self.engine.storybook_for(&name)?)
        } else {
            None
        };

        Ok(GeneratedComponent {
            name,
            code,
            props,
            styles: style.representation(),
            is_main_component: is_main,
            is_top_level: top_level,
            tests,
            storybook,
        })
    }

    fn prop(&self, name: &str) -> String {
        prop_name(name, self.options.prop_naming)
    }
}

/// Name-based interactivity classification over the shape-capable kinds.
pub fn is_interactive(node: &DesignNode) -> bool {
    let shape_kind = matches!(
        node.kind,
        NodeKind::Frame
            | NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Vector
    );
    if !shape_kind {
        return false;
    }
    let name = node.name.to_lowercase();
    name.contains("button") || name.contains("link") || name.contains("click")
}

/// Heading tag for a text node, by pixel font size.
fn text_tag(node: &DesignNode) -> &'static str {
    let size = node.text_style.as_ref().map(|s| s.font_size).unwrap_or(16.0);
    if size >= 32.0 {
        "h1"
    } else if size >= 24.0 {
        "h2"
    } else if size >= 20.0 {
        "h3"
    } else if size >= 18.0 {
        "h4"
    } else if size >= 16.0 {
        "h5"
    } else if size >= 14.0 {
        "h6"
    } else {
        "p"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{PropNaming, TypeStyle};

    fn synth_parts(
        node: &DesignNode,
        options: &ConvertOptions,
    ) -> (GeneratedComponent, Vec<GeneratedComponent>) {
        let catalog = StyleCatalog::new();
        let masters = crate::convert::index_components(node);
        let mut synthesizer = Synthesizer::new(options, &catalog, masters).unwrap();
        synthesizer.synthesize(node, true).unwrap()
    }

    #[test]
    fn test_interactive_requires_shape_kind_and_name() {
        let button = DesignNode::new("1", "Submit Button", NodeKind::Frame);
        assert!(is_interactive(&button));
        let text = DesignNode::new("2", "Submit Button", NodeKind::Text);
        assert!(!is_interactive(&text));
        let plain = DesignNode::new("3", "Card", NodeKind::Frame);
        assert!(!is_interactive(&plain));
        let link = DesignNode::new("4", "External LINK", NodeKind::Vector);
        assert!(is_interactive(&link));
    }

    #[test]
    fn test_text_tag_thresholds() {
        let sized = |size| {
            let mut node = DesignNode::new("1", "T", NodeKind::Text);
            node.text_style = Some(TypeStyle::sized("Inter", size, 400.0));
            node
        };
        assert_eq!(text_tag(&sized(32.0)), "h1");
        assert_eq!(text_tag(&sized(24.0)), "h2");
        assert_eq!(text_tag(&sized(20.0)), "h3");
        assert_eq!(text_tag(&sized(18.0)), "h4");
        assert_eq!(text_tag(&sized(16.0)), "h5");
        assert_eq!(text_tag(&sized(14.0)), "h6");
        assert_eq!(text_tag(&sized(12.0)), "p");
    }

    #[test]
    fn test_text_component_children_param() {
        let mut node = DesignNode::new("1", "Greeting", NodeKind::Text);
        node.characters = Some("Hello".into());
        let (own, descendants) = synth_parts(&node, &ConvertOptions::default());
        assert!(descendants.is_empty());
        assert!(own.props.iter().any(|p| p.name == "children"));
        assert!(own.code.contains("{children || \"Hello\"}"));
        assert!(own.code.contains("aria-label=\"Hello\""));
    }

    #[test]
    fn test_vector_placeholder_markup() {
        let node = DesignNode::new("1", "Logo", NodeKind::Vector).with_bounds(48.0, 32.0);
        let (own, _) = synth_parts(&node, &ConvertOptions::default());
        assert!(own.code.contains("viewBox=\"0 0 48 32\""));
        assert!(own.code.contains("<rect"));
        assert!(own.code.contains("fill=\"currentColor\""));
    }

    #[test]
    fn test_vector_defaults_to_24() {
        let node = DesignNode::new("1", "Dot", NodeKind::BooleanOperation);
        let (own, _) = synth_parts(&node, &ConvertOptions::default());
        assert!(own.code.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn test_snake_prop_naming() {
        let options = ConvertOptions {
            prop_naming: PropNaming::Snake,
            ..ConvertOptions::default()
        };
        let node = DesignNode::new("1", "Card", NodeKind::Frame);
        let (own, _) = synth_parts(&node, &options);
        assert!(own.props.iter().any(|p| p.name == "class_name"));
        assert!(own.code.contains("className={class_name}"));
    }

    #[test]
    fn test_interactive_gets_click_handler_and_a11y() {
        let node = DesignNode::new("1", "Buy Button", NodeKind::Frame);
        let (own, _) = synth_parts(&node, &ConvertOptions::default());
        assert!(own.props.iter().any(|p| p.name == "onClick"));
        assert!(own.code.contains("export function BuyButton("));
        assert!(own.code.contains("<button"));
        assert!(own.code.contains("role=\"button\""));
        assert!(own.code.contains("tabIndex={0}"));
    }

    #[test]
    fn test_accessibility_can_be_disabled() {
        let options = ConvertOptions {
            include_accessibility: false,
            ..ConvertOptions::default()
        };
        let node = DesignNode::new("1", "Buy Button", NodeKind::Frame);
        let (own, _) = synth_parts(&node, &options);
        assert!(!own.code.contains("role=\"button\""));
        assert!(!own.code.contains("tabIndex"));
    }
}
