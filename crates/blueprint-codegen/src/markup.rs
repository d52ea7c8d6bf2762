//! Intermediate markup representation.
//!
//! Generated markup is assembled as a small tree of tags, attributes, and
//! children, then rendered to JSX-like text in one place. Keeps tag
//! selection, attribute wiring, and text layout independently testable.

use serde::{Deserialize, Serialize};

/// One markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupNode {
    pub tag: String,
    pub attrs: Vec<MarkupAttr>,
    pub children: Vec<MarkupChild>,
}

impl MarkupNode {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a quoted string attribute (`name="value"`).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(MarkupAttr {
            name: name.into(),
            value: AttrValue::Literal(value.into()),
        });
        self
    }

    /// Add a braced expression attribute (`name={value}`).
    pub fn expr_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(MarkupAttr {
            name: name.into(),
            value: AttrValue::Expr(value.into()),
        });
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: MarkupNode) -> Self {
        self.children.push(MarkupChild::Element(child));
        self
    }

    /// Append a braced expression child (`{expr}`).
    pub fn expr_child(mut self, expr: impl Into<String>) -> Self {
        self.children.push(MarkupChild::Expr(expr.into()));
        self
    }

    /// Render to JSX-like text at the given indent (in spaces).
    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let attrs = self
            .attrs
            .iter()
            .map(|a| format!(" {}", a.render()))
            .collect::<String>();

        if self.children.is_empty() {
            return format!("{pad}<{}{attrs} />", self.tag);
        }

        let mut lines = vec![format!("{pad}<{}{attrs}>", self.tag)];
        for child in &self.children {
            match child {
                MarkupChild::Element(node) => lines.push(node.render(indent + 2)),
                MarkupChild::Expr(expr) => lines.push(format!("{pad}  {{{expr}}}")),
            }
        }
        lines.push(format!("{pad}</{}>", self.tag));
        lines.join("\n")
    }
}

/// One attribute on a markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupAttr {
    pub name: String,
    pub value: AttrValue,
}

impl MarkupAttr {
    fn render(&self) -> String {
        match &self.value {
            AttrValue::Literal(s) => format!("{}=\"{}\"", self.name, s),
            AttrValue::Expr(e) => format!("{}={{{}}}", self.name, e),
        }
    }
}

/// Attribute value form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Rendered as `name="value"`.
    Literal(String),
    /// Rendered as `name={value}`.
    Expr(String),
}

/// A child of a markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkupChild {
    Element(MarkupNode),
    /// Rendered as `{expr}`.
    Expr(String),
}
