//! Error types for webfont documents

use svgfont_core::PathError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebfontError>;

#[derive(Debug, Error)]
pub enum WebfontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid webfont document: {0}")]
    Document(#[from] quick_xml::DeError),

    #[error("Document has no <defs><font> element")]
    MissingFont,

    /// One glyph's outline could not be parsed; `glyph` is its label
    #[error("Glyph #{index} {glyph}: {source}")]
    Glyph {
        index: usize,
        glyph: String,
        #[source]
        source: PathError,
    },
}
