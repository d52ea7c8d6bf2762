//! Style resolution.
//!
//! Two interchangeable strategies turn a node's attribute set into a style
//! representation: [`exact`] computes literal declarations, [`utility`]
//! approximates through threshold-bucketed class tokens.

pub mod exact;
pub mod utility;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalized per-node computed style: ordered property-name → value-string
/// mapping. Pure function of the node and the style catalog, never stored
/// on the node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRecord(IndexMap<String, String>);

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Later writes win on conflicting keys.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as indented kebab-case declaration lines for a scoped
    /// stylesheet block.
    pub fn to_css_lines(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("  {}: {};", kebab_key(key), value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a quoted object literal, the stored style representation.
    pub fn to_object_literal(&self) -> String {
        if self.is_empty() {
            return "{}".to_string();
        }
        let entries = self
            .iter()
            .map(|(key, value)| format!("  {}: '{}'", kebab_key(key), value))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{{\n{entries}\n}}")
    }
}

impl FromIterator<(String, String)> for StyleRecord {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The resolved style under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeStyle {
    /// Exact computed declarations.
    Declarations(StyleRecord),
    /// Utility class tokens.
    Classes(Vec<String>),
}

impl NodeStyle {
    /// The style representation stored on the generated component.
    pub fn representation(&self) -> String {
        match self {
            NodeStyle::Declarations(record) => record.to_object_literal(),
            NodeStyle::Classes(classes) => classes.join(" "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NodeStyle::Declarations(record) => record.is_empty(),
            NodeStyle::Classes(classes) => classes.is_empty(),
        }
    }
}

/// camelCase property name → kebab-case CSS name.
fn kebab_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
