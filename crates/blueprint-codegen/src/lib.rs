//! Component synthesis from Blueprint design documents.
//!
//! This crate turns a design-node tree into a flat list of standalone UI
//! component source artifacts plus, via [`blueprint_tokens`], a normalized
//! design-token catalog.
//!
//! # Example
//!
//! ```
//! use blueprint_codegen::convert;
//! use blueprint_core::{ConvertOptions, DesignNode, NodeKind, StyleCatalog};
//!
//! let root = DesignNode::new("1", "Landing Page", NodeKind::Frame)
//!     .with_child(DesignNode::new("2", "Submit Button", NodeKind::Frame));
//!
//! let result = convert(&root, &StyleCatalog::new(), &ConvertOptions::default());
//! assert!(result.success);
//! assert_eq!(result.components.len(), 2);
//! ```

pub mod convert;
pub mod emit;
pub mod error;
pub mod markup;
pub mod model;
pub mod naming;
pub mod style;
pub mod synthesize;
pub mod templates;

pub use convert::{convert, index_components};
pub use error::{ConvertError, Result};
pub use markup::{AttrValue, MarkupAttr, MarkupChild, MarkupNode};
pub use model::{ComponentProp, ConversionResult, GeneratedAsset, GeneratedComponent};
pub use naming::NameAllocator;
pub use style::{NodeStyle, StyleRecord};
pub use synthesize::Synthesizer;
pub use templates::TemplateEngine;
