//! Error types for SVG markup processing

use thiserror::Error;

/// Errors raised when icon markup cannot be turned into a component
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The document contains no `<svg>` element
    #[error("No SVG element found")]
    NoSvgElement,

    /// The markup is not well-formed XML
    #[error("malformed markup at byte {position}: {message}")]
    Syntax { position: usize, message: String },
}

impl MarkupError {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        MarkupError::Syntax {
            position,
            message: message.into(),
        }
    }
}
