//! Throw arbitrary path data at the glyph parser
//!
//! Whatever the input, parsing must either succeed with steps whose
//! letters come from the command alphabet or fail with a typed error.
//! Panics, slicing inside a UTF-8 sequence and unbounded loops are bugs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use svgfont_core::{CollectDiagnostics, GlyphPath};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Keep runs short enough to avoid timeouts
    if text.len() > 10_000 {
        return;
    }

    // Split the input into primary path, override and polarity marker
    let mut parts = text.splitn(3, '\u{0}');
    let d = parts.next().unwrap_or_default();
    let d_orig = parts.next();
    let gerber_lp = parts.next();

    let glyph = GlyphPath {
        unicode: Some("fuzz"),
        d: Some(d),
        d_orig,
        gerber_lp,
    };

    let sink = CollectDiagnostics::new();
    match glyph.parse(&sink) {
        Ok(steps) => {
            for step in &steps {
                assert!("MmLlHhVvCcSsQqTtAaZz".contains(step.letter()));
                assert_eq!(step.is_close(), step.parameters().is_empty());
            }
            assert!(sink.polarity_mismatches() <= 1);
        },
        Err(err) => {
            // The remainder is always a suffix of the parsed string
            let source = glyph.effective_path().unwrap_or_default();
            assert!(source.ends_with(err.text()) || err.is_defect());
        },
    }
});
