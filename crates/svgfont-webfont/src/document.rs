// this_file: crates/svgfont-webfont/src/document.rs

//! The SVG webfont document model
//!
//! Only the parts needed to extract outlines are kept:
//!
//! ```xml
//! <svg>
//!   <defs>
//!     <font id="..." horiz-adv-x="...">
//!       <font-face units-per-em="..." ascent="..." descent="..."/>
//!       <missing-glyph horiz-adv-x="..."/>
//!       <glyph unicode="..." horiz-adv-x="..." d="..." d-orig="..." gerber-lp="..."/>
//!     </font>
//!   </defs>
//! </svg>
//! ```
//!
//! Everything else (metadata, kerning, unknown attributes) is ignored.
//! Missing integer attributes read as 0.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use svgfont_core::{Diagnostics, GlyphPath, PathStep};

use crate::error::{Result, WebfontError};

/// A whole webfont document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawSvg")]
pub struct FontData {
    pub font: Option<Font>,
}

#[derive(Deserialize)]
struct RawSvg {
    #[serde(default)]
    defs: Option<RawDefs>,
}

#[derive(Deserialize)]
struct RawDefs {
    #[serde(default)]
    font: Option<Font>,
}

impl From<RawSvg> for FontData {
    fn from(raw: RawSvg) -> Self {
        Self {
            font: raw.defs.and_then(|defs| defs.font),
        }
    }
}

impl FontData {
    /// Read and deserialize a webfont file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let data: FontData = text.parse()?;
        log::debug!(
            "loaded {} ({} glyphs)",
            path.as_ref().display(),
            data.font.as_ref().map_or(0, |font| font.glyphs.len())
        );
        Ok(data)
    }

    /// The font, or [`WebfontError::MissingFont`] when the document has none
    pub fn font(&self) -> Result<&Font> {
        self.font.as_ref().ok_or(WebfontError::MissingFont)
    }
}

impl FromStr for FontData {
    type Err = WebfontError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(s)?)
    }
}

/// The `<font>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Font {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@horiz-adv-x", default)]
    pub horiz_adv_x: i32,
    #[serde(rename = "font-face", default)]
    pub font_face: Option<FontFace>,
    #[serde(rename = "missing-glyph", default)]
    pub missing_glyph: Option<MissingGlyph>,
    #[serde(rename = "glyph", default)]
    pub glyphs: Vec<Glyph>,
}

impl Font {
    /// Glyphs whose non-empty `d-orig` will replace their `d`
    pub fn override_count(&self) -> usize {
        self.glyphs
            .iter()
            .filter(|glyph| glyph.d.is_some() && glyph.d_orig.as_deref().is_some_and(|d| !d.is_empty()))
            .count()
    }

    /// Glyphs carrying a `gerber-lp` marker
    pub fn polarity_count(&self) -> usize {
        self.glyphs.iter().filter(|glyph| glyph.gerber_lp.is_some()).count()
    }

    /// Glyphs with an outline to parse
    pub fn outline_count(&self) -> usize {
        self.glyphs.iter().filter(|glyph| glyph.d.is_some()).count()
    }
}

/// The `<font-face>` element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FontFace {
    #[serde(rename = "@units-per-em", default)]
    pub units_per_em: i32,
    #[serde(rename = "@ascent", default)]
    pub ascent: i32,
    #[serde(rename = "@descent", default)]
    pub descent: i32,
}

/// The `<missing-glyph>` element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MissingGlyph {
    #[serde(rename = "@horiz-adv-x", default)]
    pub horiz_adv_x: i32,
}

/// A `<glyph>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Glyph {
    #[serde(rename = "@horiz-adv-x", default)]
    pub horiz_adv_x: i32,
    #[serde(rename = "@unicode", default)]
    pub unicode: Option<String>,
    #[serde(rename = "@d", default)]
    pub d: Option<String>,
    #[serde(rename = "@d-orig", default)]
    pub d_orig: Option<String>,
    #[serde(rename = "@gerber-lp", default)]
    pub gerber_lp: Option<String>,
}

impl Glyph {
    /// Borrow the outline attributes for parsing
    pub fn path(&self) -> GlyphPath<'_> {
        GlyphPath {
            unicode: self.unicode.as_deref(),
            d: self.d.as_deref(),
            d_orig: self.d_orig.as_deref(),
            gerber_lp: self.gerber_lp.as_deref(),
        }
    }

    /// Parse this glyph's outline, see [`GlyphPath::parse`]
    pub fn parse_path<D>(&self, sink: &D) -> svgfont_core::Result<Vec<PathStep>>
    where
        D: Diagnostics + ?Sized,
    {
        self.path().parse(sink)
    }
}
