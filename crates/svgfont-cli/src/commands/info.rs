//! Info command implementation
//!
//! Displays font metrics and how many glyphs carry outlines, overrides
//! and polarity markers.

use crate::cli::InfoArgs;
use anyhow::{Context, Result};
use svgfont_webfont::FontData;

pub fn run(args: &InfoArgs) -> Result<()> {
    let data = FontData::from_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let font = data.font()?;

    println!("svgfont v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Font: {}", if font.id.is_empty() { "(no id)" } else { font.id.as_str() });
    println!("  Advance:        {}", font.horiz_adv_x);

    if let Some(face) = font.font_face {
        println!("  Units per em:   {}", face.units_per_em);
        println!("  Ascent:         {}", face.ascent);
        println!("  Descent:        {}", face.descent);
    }

    if let Some(missing) = font.missing_glyph {
        println!("  Missing glyph:  advance {}", missing.horiz_adv_x);
    }

    println!();
    println!("Glyphs:           {}", font.glyphs.len());
    println!("  With outline:   {}", font.outline_count());
    println!("  Using d-orig:   {}", font.override_count());
    println!("  With gerber-lp: {}", font.polarity_count());

    Ok(())
}
