//! Feed arbitrary documents through the webfont loader and glyph batch
//!
//! Malformed XML must come back as an error, never a panic, and a font
//! that loads must be parseable under the skip policy without aborting.

#![no_main]

use libfuzzer_sys::fuzz_target;
use svgfont_core::{CollectDiagnostics, ErrorPolicy, ParseConfig};
use svgfont_webfont::FontData;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if text.len() > 50_000 {
        return;
    }

    let Ok(document) = text.parse::<FontData>() else {
        return;
    };

    if let Some(font) = &document.font {
        let config = ParseConfig::default()
            .with_error_policy(ErrorPolicy::Skip)
            .with_parallel(false);
        let parsed = font
            .parse_glyphs(&config, &CollectDiagnostics::new())
            .expect("skip policy never aborts");
        assert_eq!(parsed.glyphs.len() + parsed.failures.len(), font.glyphs.len());
    }
});
