// this_file: crates/svgfont-cli/src/main.rs

//! svgfont CLI - glyph outlines from SVG webfonts

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn init_logging(cli: &Cli) {
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Path(args) => commands::path::run(args),
    }
}
