//! The named-style catalog.
//!
//! The document source publishes a table of named styles (id → display
//! name). The conversion engine never computes this table; it is supplied
//! by the caller and consulted when a node references a style id.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Style-id → style-name table, supplied by the document source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCatalog(IndexMap<String, String>);

impl StyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named style.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.0.insert(id.into(), name.into());
    }

    /// Look up a style name by id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleCatalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Mangle a style display name into a CSS custom-property name:
/// `Colors/Primary/500` → `--colors-primary-500`. Whitespace runs collapse
/// to a single hyphen.
pub fn css_variable_name(style_name: &str) -> String {
    let mut out = String::from("--");
    let mut in_space = false;
    for c in style_name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        match c {
            '/' => out.push('-'),
            c if c.is_ascii_alphanumeric() || c == '-' => out.push(c),
            _ => {}
        }
    }
    out
}
