// this_file: crates/svgfont-webfont/src/batch.rs

//! Parsing every glyph of a font, in parallel when allowed.

use rayon::prelude::*;
use svgfont_core::{Diagnostics, ErrorPolicy, GlyphLabel, ParseConfig, PathError, PathStep};

use crate::document::{Font, Glyph};
use crate::error::{Result, WebfontError};

/// A glyph together with its parsed outline
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGlyph<'a> {
    /// Position of the glyph in the document
    pub index: usize,
    pub glyph: &'a Glyph,
    pub steps: Vec<PathStep>,
}

impl ParsedGlyph<'_> {
    /// Closed subpaths in this outline
    pub fn closes(&self) -> usize {
        self.steps.iter().filter(|step| step.is_close()).count()
    }
}

/// A glyph left out of the result under [`ErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphFailure {
    pub index: usize,
    pub unicode: Option<String>,
    pub error: PathError,
}

impl GlyphFailure {
    pub fn label(&self) -> GlyphLabel<'_> {
        GlyphLabel(self.unicode.as_deref())
    }

    fn into_error(self) -> WebfontError {
        WebfontError::Glyph {
            index: self.index,
            glyph: self.label().to_string(),
            source: self.error,
        }
    }
}

/// Every glyph of a font, parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont<'a> {
    pub font: &'a Font,
    /// Successfully parsed glyphs, in document order
    pub glyphs: Vec<ParsedGlyph<'a>>,
    /// Glyphs that failed and were skipped, in document order
    pub failures: Vec<GlyphFailure>,
}

impl ParsedFont<'_> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.glyphs.iter().map(|glyph| glyph.steps.len()).sum()
    }
}

type GlyphResult<'a> = (usize, &'a Glyph, svgfont_core::Result<Vec<PathStep>>);

fn parse_one<'a, D>((index, glyph): (usize, &'a Glyph), sink: &D) -> GlyphResult<'a>
where
    D: Diagnostics + ?Sized,
{
    (index, glyph, glyph.parse_path(sink))
}

impl Font {
    /// Parse the outline of every glyph
    ///
    /// Glyphs are independent of each other; a failing glyph never affects
    /// the steps of another. With [`ErrorPolicy::Abort`] the first failure
    /// in document order is returned as [`WebfontError::Glyph`]. With
    /// [`ErrorPolicy::Skip`] failures are logged and collected in
    /// [`ParsedFont::failures`].
    pub fn parse_glyphs<D>(&self, config: &ParseConfig, sink: &D) -> Result<ParsedFont<'_>>
    where
        D: Diagnostics + ?Sized,
    {
        let results: Vec<GlyphResult<'_>> = if config.parallel {
            self.glyphs
                .par_iter()
                .enumerate()
                .map(|item| parse_one(item, sink))
                .collect()
        } else if config.on_error == ErrorPolicy::Abort {
            // Sequential abort stops at the first failure
            let mut results = Vec::with_capacity(self.glyphs.len());
            for item in self.glyphs.iter().enumerate() {
                let result = parse_one(item, sink);
                let failed = result.2.is_err();
                results.push(result);
                if failed {
                    break;
                }
            }
            results
        } else {
            self.glyphs
                .iter()
                .enumerate()
                .map(|item| parse_one(item, sink))
                .collect()
        };

        let mut parsed = ParsedFont {
            font: self,
            glyphs: Vec::with_capacity(results.len()),
            failures: Vec::new(),
        };

        for (index, glyph, result) in results {
            match result {
                Ok(steps) => parsed.glyphs.push(ParsedGlyph { index, glyph, steps }),
                Err(error) => {
                    let failure = GlyphFailure {
                        index,
                        unicode: glyph.unicode.clone(),
                        error,
                    };
                    if config.on_error == ErrorPolicy::Abort {
                        return Err(failure.into_error());
                    }
                    log::error!("skipping glyph #{} {}: {}", index, failure.label(), failure.error);
                    parsed.failures.push(failure);
                },
            }
        }

        log::debug!(
            "parsed {} glyphs ({} steps, {} skipped)",
            parsed.glyphs.len(),
            parsed.step_count(),
            parsed.failures.len()
        );

        Ok(parsed)
    }
}
