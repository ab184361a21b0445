//! Error types for svgfont path parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathError>;

/// Fatal failures while turning a path-data string into steps
///
/// Either variant aborts the current glyph. There is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The remaining text starts with neither a close command nor a
    /// command letter followed by a numeric run.
    #[error("Unknown path command at byte {offset}: {remainder:?}")]
    UnknownCommand { offset: usize, remainder: String },

    /// A numeric run accepted by the command scanner could not be
    /// converted to a finite `f64`.
    #[error("Unable to parse {text:?} as a number")]
    Number { text: String },
}

impl PathError {
    /// True for failures that point at an internal scanning inconsistency
    /// rather than malformed input.
    pub fn is_defect(&self) -> bool {
        matches!(self, PathError::Number { .. })
    }

    /// The unconsumed text the error refers to
    pub fn text(&self) -> &str {
        match self {
            PathError::UnknownCommand { remainder, .. } => remainder,
            PathError::Number { text } => text,
        }
    }
}
