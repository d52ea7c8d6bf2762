//! The conversion entry point.
//!
//! `convert` is the single boundary between the engine and its caller:
//! index masters, extract tokens, synthesize depth-first, assemble the
//! result. Any error inside the pipeline is caught exactly once here and
//! becomes a failed result with no partial output.

use std::collections::HashMap;

use blueprint_core::{ConvertOptions, DesignNode, NodeKind, OutputFormat, StyleCatalog, StyleStrategy};
use blueprint_tokens::{emit as token_emit, extract_tokens};

use crate::error::Result;
use crate::model::{ConversionResult, GeneratedAsset};
use crate::synthesize::Synthesizer;

/// Index reusable-component masters by id: one pre-order pass, component
/// kind only. Ids referenced but absent simply stay unmatched.
pub fn index_components(root: &DesignNode) -> HashMap<&str, &DesignNode> {
    let mut index = HashMap::new();
    visit(root, &mut index);
    index
}

fn visit<'a>(node: &'a DesignNode, index: &mut HashMap<&'a str, &'a DesignNode>) {
    if node.kind == NodeKind::Component {
        index.insert(node.id.as_str(), node);
    }
    for child in &node.children {
        visit(child, index);
    }
}

/// Convert a design-node tree into component artifacts and a token catalog.
pub fn convert(
    root: &DesignNode,
    catalog: &StyleCatalog,
    options: &ConvertOptions,
) -> ConversionResult {
    match convert_inner(root, catalog, options) {
        Ok(result) => result,
        Err(error) => ConversionResult::failure(error.to_string()),
    }
}

fn convert_inner(
    root: &DesignNode,
    catalog: &StyleCatalog,
    options: &ConvertOptions,
) -> Result<ConversionResult> {
    let design_tokens = options.extract_design_tokens.then(|| extract_tokens(root));

    let masters = index_components(root);
    let mut synthesizer = Synthesizer::new(options, catalog, masters)?;
    let (own, descendants) = synthesizer.synthesize(root, true)?;

    let mut components = descendants;
    components.push(own);

    let mut assets = Vec::new();
    if options.output_format == OutputFormat::FullProject {
        if let Some(tokens) = &design_tokens {
            let asset = match options.style_strategy {
                StyleStrategy::Exact => GeneratedAsset {
                    path: "src/design-tokens.css".to_string(),
                    content: token_emit::tokens_to_css(tokens),
                },
                StyleStrategy::UtilityBucket => GeneratedAsset {
                    path: "tailwind.config.js".to_string(),
                    content: token_emit::tokens_to_utility_config(tokens),
                },
            };
            assets.push(asset);
        }
    }

    Ok(ConversionResult {
        success: true,
        components,
        design_tokens,
        assets,
        errors: Vec::new(),
        warnings: synthesizer.into_warnings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{
        AutoLayout, GradientStop, OverrideValue, Paint, Rgba, TypeStyle, Vec2,
    };
    use proptest::prelude::*;

    fn frame(id: &str, name: &str) -> DesignNode {
        DesignNode::new(id, name, NodeKind::Frame)
    }

    #[test]
    fn test_indexer_collects_components_only() {
        let root = frame("1", "Root")
            .with_child(DesignNode::new("2", "Button", NodeKind::Component))
            .with_child(
                frame("3", "Section").with_child(DesignNode::new(
                    "4",
                    "Card",
                    NodeKind::Component,
                )),
            )
            .with_child(DesignNode::new("5", "Label", NodeKind::Text));

        let index = index_components(&root);
        assert_eq!(index.len(), 2);
        assert!(index.contains_key("2"));
        assert!(index.contains_key("4"));
        assert!(!index.contains_key("1"));
    }

    #[test]
    fn test_hidden_children_are_skipped_entirely() {
        let root = frame("1", "Root")
            .with_child(frame("2", "Visible A"))
            .with_child(frame("3", "Visible B"))
            .with_child(frame("4", "Ghost").hidden());

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(result.success);
        assert_eq!(result.components.len(), 3);
        let names: Vec<&str> = result.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["VisibleA", "VisibleB", "Root"]);
    }

    #[test]
    fn test_submit_button_scenario() {
        let mut root = frame("1", "Root");
        root.layout = AutoLayout::vertical(16.0);
        let root = root.with_child(frame("2", "Submit Button"));

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(result.success);
        assert_eq!(result.components.len(), 2);

        let button = &result.components[0];
        assert_eq!(button.name, "SubmitButton");
        assert!(button.code.contains("<button"));

        let parent = &result.components[1];
        assert!(parent.is_top_level);
        assert!(parent.code.contains("<SubmitButton />"));
        assert!(parent.code.contains("gap: 16px;"));
    }

    #[test]
    fn test_instance_references_master_by_name() {
        let master = DesignNode::new("10", "Primary Button", NodeKind::Component);
        let mut instance = DesignNode::new("11", "Hero CTA", NodeKind::Instance);
        instance.master_id = Some("10".into());
        instance
            .overrides
            .insert("12".into(), OverrideValue::Text("Get started".into()));
        let root = frame("1", "Root").with_child(master).with_child(instance);

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(result.success);

        let cta = result
            .components
            .iter()
            .find(|c| c.name == "HeroCTA")
            .unwrap();
        assert!(cta.code.contains("<PrimaryButton text={text} />"));
        assert_eq!(cta.props.len(), 1);
        assert_eq!(cta.props[0].default_value.as_deref(), Some("\"Get started\""));
        assert_eq!(cta.styles, "{}");

        let master = result
            .components
            .iter()
            .find(|c| c.name == "PrimaryButton")
            .unwrap();
        assert!(master.is_main_component);
    }

    #[test]
    fn test_unresolved_instance_degrades_with_warning() {
        let mut instance = DesignNode::new("2", "Orphan", NodeKind::Instance);
        instance.master_id = Some("missing".into());
        let root = frame("1", "Root").with_child(instance);

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(result.success);
        let orphan = result
            .components
            .iter()
            .find(|c| c.name == "Orphan")
            .unwrap();
        // Plain container path: standard props instead of a master reference.
        assert!(orphan.code.contains("<div"));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("unresolved master")));
    }

    #[test]
    fn test_non_text_override_is_warned_and_ignored() {
        let master = DesignNode::new("10", "Toggle", NodeKind::Component);
        let mut instance = DesignNode::new("11", "Row Toggle", NodeKind::Instance);
        instance.master_id = Some("10".into());
        instance
            .overrides
            .insert("13".into(), OverrideValue::Toggle(true));
        let root = frame("1", "Root").with_child(master).with_child(instance);

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        let row = result
            .components
            .iter()
            .find(|c| c.name == "RowToggle")
            .unwrap();
        assert!(row.props.is_empty());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("unsupported kind")));
    }

    #[test]
    fn test_failure_isolation_empties_output() {
        let mut broken = frame("3", "Gradient Box");
        broken.fills = vec![Paint::linear_gradient(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            vec![],
        )];
        let root = frame("1", "Root")
            .with_child(frame("2", "Fine"))
            .with_child(frame("4", "Deep").with_child(broken));

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(!result.success);
        assert!(result.components.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("Malformed gradient"));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let mut text = DesignNode::new("3", "Headline", NodeKind::Text);
        text.characters = Some("Welcome".into());
        text.text_style = Some(TypeStyle::sized("Inter", 36.0, 700.0));
        let root = frame("1", "Root")
            .with_child(frame("2", "$$$"))
            .with_child(text);

        let options = ConvertOptions {
            generate_tests: true,
            generate_storybook: true,
            ..ConvertOptions::default()
        };
        let catalog = StyleCatalog::new();
        let first = convert(&root, &catalog, &options);
        let second = convert(&root, &catalog, &options);
        assert_eq!(first.components, second.components);
        assert_eq!(first.design_tokens, second.design_tokens);

        let headline = first
            .components
            .iter()
            .find(|c| c.name == "Headline")
            .unwrap();
        assert!(headline.tests.as_deref().unwrap().contains("describe('Headline'"));
        assert!(headline
            .storybook
            .as_deref()
            .unwrap()
            .contains("Components/Headline"));
    }

    #[test]
    fn test_tokens_skipped_when_disabled() {
        let options = ConvertOptions {
            extract_design_tokens: false,
            ..ConvertOptions::default()
        };
        let result = convert(&frame("1", "Root"), &StyleCatalog::new(), &options);
        assert!(result.success);
        assert!(result.design_tokens.is_none());
    }

    #[test]
    fn test_full_project_emits_token_stylesheet() {
        let mut root = frame("1", "Root");
        root.fills = vec![Paint::solid(Rgba::BLACK)];

        let options = ConvertOptions {
            output_format: OutputFormat::FullProject,
            ..ConvertOptions::default()
        };
        let result = convert(&root, &StyleCatalog::new(), &options);
        assert_eq!(result.assets.len(), 1);
        assert_eq!(result.assets[0].path, "src/design-tokens.css");
        assert!(result.assets[0].content.contains("--black: #000000;"));

        let options = ConvertOptions {
            output_format: OutputFormat::FullProject,
            style_strategy: StyleStrategy::UtilityBucket,
            ..ConvertOptions::default()
        };
        let result = convert(&root, &StyleCatalog::new(), &options);
        assert_eq!(result.assets[0].path, "tailwind.config.js");
    }

    #[test]
    fn test_token_table_black_white() {
        let mut a = frame("2", "A");
        a.fills = vec![Paint::solid(Rgba::BLACK)];
        let mut b = frame("3", "B");
        b.fills = vec![Paint::solid(Rgba::WHITE)];
        let root = frame("1", "Root").with_child(a).with_child(b);

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        let tokens = result.design_tokens.unwrap();
        assert_eq!(tokens.colors.get("black").map(String::as_str), Some("#000000"));
        assert_eq!(tokens.colors.get("white").map(String::as_str), Some("#ffffff"));
        assert_eq!(tokens.colors.len(), 2);
    }

    #[test]
    fn test_gradient_fill_round_trip_through_convert() {
        let mut box_node = frame("2", "Gradient Box");
        box_node.fills = vec![Paint::linear_gradient(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            vec![
                GradientStop::new(0.0, Rgba::BLACK),
                GradientStop::new(1.0, Rgba::WHITE),
            ],
        )];
        let root = frame("1", "Root").with_child(box_node);

        let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
        assert!(result.success);
        let gradient_box = &result.components[0];
        assert!(gradient_box.code.contains("linear-gradient(90deg,"));
    }

    fn arb_kind() -> impl Strategy<Value = NodeKind> {
        prop_oneof![
            Just(NodeKind::Frame),
            Just(NodeKind::Component),
            Just(NodeKind::Text),
            Just(NodeKind::Vector),
            Just(NodeKind::Instance),
        ]
    }

    fn arb_tree() -> impl Strategy<Value = DesignNode> {
        let leaf = ("[a-z0-9]{1,8}", "[A-Za-z ]{0,12}", arb_kind())
            .prop_map(|(id, name, kind)| DesignNode::new(id, name, kind));
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                "[a-z0-9]{1,8}",
                "[A-Za-z ]{0,12}",
                arb_kind(),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(id, name, kind, children)| {
                    let mut node = DesignNode::new(id, name, kind);
                    node.children = children;
                    node
                })
        })
    }

    proptest! {
        #[test]
        fn prop_indexer_keys_match_component_ids(root in arb_tree()) {
            let index = index_components(&root);

            let mut expected = std::collections::HashSet::new();
            let mut stack = vec![&root];
            while let Some(node) = stack.pop() {
                if node.kind == NodeKind::Component {
                    expected.insert(node.id.as_str());
                }
                stack.extend(node.children.iter());
            }

            let keys: std::collections::HashSet<&str> = index.keys().copied().collect();
            prop_assert_eq!(keys, expected);
        }
    }
}
