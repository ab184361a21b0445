//! SVG webfont documents for svgfont
//!
//! Reads the `<font>` block of an SVG webfont and parses the outline of
//! every glyph with [`svgfont_core`]. Document deserialization uses
//! quick-xml's serde support; glyphs are parsed in parallel with rayon.
//!
//! ```no_run
//! use svgfont_core::{LogDiagnostics, ParseConfig};
//! use svgfont_webfont::FontData;
//!
//! let data = FontData::from_path("silkscreen.svg")?;
//! let font = data.font()?;
//! let parsed = font.parse_glyphs(&ParseConfig::from_env(), &LogDiagnostics)?;
//! for glyph in &parsed.glyphs {
//!     println!("{:?}: {} steps", glyph.glyph.unicode, glyph.steps.len());
//! }
//! # Ok::<(), svgfont_webfont::WebfontError>(())
//! ```

pub mod batch;
pub mod document;
pub mod error;

pub use batch::{GlyphFailure, ParsedFont, ParsedGlyph};
pub use document::{Font, FontData, FontFace, Glyph, MissingGlyph};
pub use error::{Result, WebfontError};
