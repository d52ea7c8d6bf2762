//! Error types for component synthesis.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A gradient paint without the data needed to render it.
    #[error("Malformed gradient on node '{node}': {reason}")]
    MalformedGradient { node: String, reason: String },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
