//! Per-glyph parsing rules
//!
//! A webfont glyph may carry up to three strings relevant to its outline:
//! the primary `d` path, a `d-orig` override and a `gerber-lp` polarity
//! marker with one character per closed subpath. [`GlyphPath`] bundles
//! them and applies the override and polarity rules around
//! [`parse_path`](crate::path::parse_path).

use crate::diagnostics::{Diagnostics, GlyphLabel};
use crate::error::Result;
use crate::path::parse_path;
use crate::types::PathStep;

/// Borrowed view of the outline-related attributes of one glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphPath<'a> {
    /// Identifies the glyph in diagnostics
    pub unicode: Option<&'a str>,
    /// Primary path data
    pub d: Option<&'a str>,
    /// Override path data; wins over `d` when non-empty
    pub d_orig: Option<&'a str>,
    /// Polarity marker, one character per close command
    pub gerber_lp: Option<&'a str>,
}

impl<'a> GlyphPath<'a> {
    pub fn new(d: &'a str) -> Self {
        Self {
            d: Some(d),
            ..Self::default()
        }
    }

    pub fn with_unicode(mut self, unicode: &'a str) -> Self {
        self.unicode = Some(unicode);
        self
    }

    pub fn with_override(mut self, d_orig: &'a str) -> Self {
        self.d_orig = Some(d_orig);
        self
    }

    pub fn with_polarity(mut self, gerber_lp: &'a str) -> Self {
        self.gerber_lp = Some(gerber_lp);
        self
    }

    pub fn label(&self) -> GlyphLabel<'a> {
        GlyphLabel(self.unicode)
    }

    /// The non-empty override, if any
    fn active_override(&self) -> Option<&'a str> {
        self.d_orig.filter(|d_orig| !d_orig.is_empty())
    }

    /// The string [`parse`](Self::parse) will read, or `None` when the glyph
    /// has no primary path at all
    pub fn effective_path(&self) -> Option<&'a str> {
        let d = self.d?;
        Some(self.active_override().unwrap_or(d))
    }

    /// Whether the close count agrees with the polarity marker
    ///
    /// Zero or one close never needs a marker.
    pub fn polarity_matches(&self, closes: usize) -> bool {
        closes <= 1
            || self
                .gerber_lp
                .is_some_and(|marker| marker.chars().count() == closes)
    }

    /// Parse the glyph outline into ordered steps
    ///
    /// A glyph without a primary path yields no steps and no diagnostics.
    /// Otherwise the override path, when non-empty, is parsed in place of
    /// the primary one and `sink` is told so. After a successful parse the
    /// close count is checked against the polarity marker; a mismatch is
    /// reported to `sink` and leaves the steps untouched.
    pub fn parse<D>(&self, sink: &D) -> Result<Vec<PathStep>>
    where
        D: Diagnostics + ?Sized,
    {
        let Some(d) = self.d else {
            return Ok(Vec::new());
        };

        let source = match self.active_override() {
            Some(d_orig) => {
                sink.override_used(self.label(), d_orig);
                d_orig
            },
            None => d,
        };

        let parsed = parse_path(source)?;

        if !self.polarity_matches(parsed.closes) {
            sink.polarity_mismatch(self.label(), parsed.closes, self.gerber_lp);
        }

        Ok(parsed.steps)
    }
}
