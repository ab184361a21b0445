//! Parse command implementation
//!
//! Parses every glyph of a webfont and writes the steps as JSON or JSONL.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use svgfont_core::{CollectDiagnostics, ParseConfig};
use svgfont_webfont::FontData;

use crate::cli::{OutputFormat, ParseArgs};
use crate::output::{to_json, FontRecord, GlyphRecord};

/// Environment defaults, then explicit flags
fn parse_config(args: &ParseArgs) -> ParseConfig {
    let mut config = ParseConfig::from_env();
    if let Some(on_error) = args.on_error {
        config.on_error = on_error;
    }
    if args.no_parallel {
        config.parallel = false;
    }
    config
}

pub fn run(args: &ParseArgs) -> Result<()> {
    let config = parse_config(args);
    log::debug!("parse config: {:?}", config);

    let data = FontData::from_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let font = data.font()?;
    let diagnostics = CollectDiagnostics::forwarding();
    let parsed = font
        .parse_glyphs(&config, &diagnostics)
        .with_context(|| format!("failed to parse glyphs of {}", args.file.display()))?;

    let mut out: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(&FontRecord::from(&parsed), args.pretty)?)?;
        },
        OutputFormat::Jsonl => {
            for glyph in &parsed.glyphs {
                writeln!(out, "{}", to_json(&GlyphRecord::from(glyph), false)?)?;
            }
        },
    }
    out.flush()?;

    log::info!(
        "{} glyphs, {} steps, {} overrides, {} polarity mismatches",
        parsed.glyphs.len(),
        parsed.step_count(),
        diagnostics.overrides(),
        diagnostics.polarity_mismatches()
    );

    if !parsed.is_complete() {
        bail!("{} glyphs failed to parse", parsed.failures.len());
    }

    Ok(())
}
