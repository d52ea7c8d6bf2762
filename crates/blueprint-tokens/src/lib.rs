//! Design-token extraction for Blueprint documents.
//!
//! One independent pre-order pass over the node tree accumulates the
//! distinct colors, typography triples, corner radii, and shadow
//! signatures in use, then synthesizes a normalized token catalog from
//! them. Extraction never feeds back into style resolution; the two
//! passes only share the input tree.

mod extract;
mod model;
mod naming;

pub mod emit;

pub use extract::extract_tokens;
pub use model::{DesignTokens, TypeToken};
