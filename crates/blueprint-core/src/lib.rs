//! Core types for the Blueprint conversion engine.
//!
//! This crate provides the foundational types used across the other
//! blueprint crates:
//! - The design-document node tree (`DesignNode` and friends)
//! - Value types (colors, rectangles, gradients, typography)
//! - The named-style catalog supplied by the document source
//! - Conversion options

pub mod catalog;
pub mod node;
pub mod options;
pub mod types;

pub use catalog::*;
pub use node::*;
pub use options::*;
pub use types::*;
