//! JSON records written by the parse and path commands

use serde::Serialize;
use svgfont_core::PathStep;
use svgfont_webfont::{GlyphFailure, ParsedFont, ParsedGlyph};

/// One drawing step
#[derive(Debug, Serialize)]
pub struct StepRecord<'a> {
    pub command: char,
    pub parameters: &'a [f64],
}

impl<'a> From<&'a PathStep> for StepRecord<'a> {
    fn from(step: &'a PathStep) -> Self {
        Self {
            command: step.letter(),
            parameters: step.parameters(),
        }
    }
}

pub fn steps(steps: &[PathStep]) -> Vec<StepRecord<'_>> {
    steps.iter().map(StepRecord::from).collect()
}

/// One parsed glyph
#[derive(Debug, Serialize)]
pub struct GlyphRecord<'a> {
    pub index: usize,
    pub unicode: Option<&'a str>,
    pub horiz_adv_x: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerber_lp: Option<&'a str>,
    pub steps: Vec<StepRecord<'a>>,
}

impl<'a> From<&'a ParsedGlyph<'a>> for GlyphRecord<'a> {
    fn from(parsed: &'a ParsedGlyph<'a>) -> Self {
        Self {
            index: parsed.index,
            unicode: parsed.glyph.unicode.as_deref(),
            horiz_adv_x: parsed.glyph.horiz_adv_x,
            gerber_lp: parsed.glyph.gerber_lp.as_deref(),
            steps: steps(&parsed.steps),
        }
    }
}

/// A glyph that was left out
#[derive(Debug, Serialize)]
pub struct SkippedRecord<'a> {
    pub index: usize,
    pub unicode: Option<&'a str>,
    pub error: String,
}

impl<'a> From<&'a GlyphFailure> for SkippedRecord<'a> {
    fn from(failure: &'a GlyphFailure) -> Self {
        Self {
            index: failure.index,
            unicode: failure.unicode.as_deref(),
            error: failure.error.to_string(),
        }
    }
}

/// The whole font
#[derive(Debug, Serialize)]
pub struct FontRecord<'a> {
    pub id: &'a str,
    pub horiz_adv_x: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_per_em: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descent: Option<i32>,
    pub glyphs: Vec<GlyphRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord<'a>>,
}

impl<'a> From<&'a ParsedFont<'a>> for FontRecord<'a> {
    fn from(parsed: &'a ParsedFont<'a>) -> Self {
        let face = parsed.font.font_face;
        Self {
            id: &parsed.font.id,
            horiz_adv_x: parsed.font.horiz_adv_x,
            units_per_em: face.map(|face| face.units_per_em),
            ascent: face.map(|face| face.ascent),
            descent: face.map(|face| face.descent),
            glyphs: parsed.glyphs.iter().map(GlyphRecord::from).collect(),
            skipped: parsed.failures.iter().map(SkippedRecord::from).collect(),
        }
    }
}

/// Serialize with or without pretty-printing
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
