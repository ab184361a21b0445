//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use svgfont_core::ErrorPolicy;

/// svgfont - glyph outlines from SVG webfonts as drawing steps
#[derive(Parser, Debug)]
#[command(name = "svgfont")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(long = "verbose", global = true)]
    pub verbose: bool,

    /// Silent mode (errors only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display font metrics and glyph statistics
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Parse every glyph outline of a webfont
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Parse a single path-data string
    Path(PathArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// SVG webfont file
    pub file: PathBuf,
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// SVG webfont file
    pub file: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// What to do when a glyph fails to parse: abort or skip
    /// (defaults to $SVGFONT_ON_ERROR, then abort)
    #[arg(long = "on-error")]
    pub on_error: Option<ErrorPolicy>,

    /// Parse glyphs on a single thread
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Path data, e.g. "M0 0L10 10z"
    pub d: String,

    /// Polarity marker to check the close count against
    #[arg(short = 'p', long = "polarity")]
    pub polarity: Option<String>,

    /// Unicode label used in diagnostics
    #[arg(short = 'u', long = "unicode")]
    pub unicode: Option<String>,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document for the whole font
    Json,
    /// One JSON object per glyph and line
    Jsonl,
}
