//! Path command implementation
//!
//! Parses one path-data string given on the command line.

use anyhow::Result;
use svgfont_core::{GlyphPath, LogDiagnostics};

use crate::cli::PathArgs;
use crate::output::{steps, to_json};

pub fn run(args: &PathArgs) -> Result<()> {
    let glyph = GlyphPath {
        unicode: args.unicode.as_deref(),
        gerber_lp: args.polarity.as_deref(),
        ..GlyphPath::new(&args.d)
    };

    let parsed = glyph.parse(&LogDiagnostics)?;
    println!("{}", to_json(&steps(&parsed), args.pretty)?);

    Ok(())
}
