//! svgfont Core: glyph outlines as ordered drawing steps
//!
//! SVG webfonts store every glyph outline as a `d` attribute, the same
//! mini-language SVG paths use. This crate turns one such string into a
//! sequence of [`PathStep`]s, keeping command letters and operands exactly
//! as written, and checks the number of closed subpaths against the
//! glyph's polarity marker.
//!
//! ## Two Layers
//!
//! 1. **Numeric scanning** ([`number`]) - runs of operands become `f64`s
//! 2. **Step parsing** ([`path`]) - commands and their runs become steps
//!
//! On top of those, [`GlyphPath`] applies the per-glyph rules: which
//! string to parse when an override is present, and when to warn about
//! the polarity marker.
//!
//! ## Parse a Glyph
//!
//! ```rust
//! use svgfont_core::{GlyphPath, LogDiagnostics};
//!
//! let glyph = GlyphPath::new("M0 0L10 0L10 10zM2 2l1 1z")
//!     .with_unicode("o")
//!     .with_polarity("cd");
//!
//! let steps = glyph.parse(&LogDiagnostics)?;
//! assert_eq!(steps.len(), 7);
//! assert_eq!(steps[0].letter(), 'M');
//! assert_eq!(steps[0].parameters(), &[0.0, 0.0]);
//! # Ok::<(), svgfont_core::PathError>(())
//! ```
//!
//! Failures are typed ([`PathError`]) and never partial: a glyph either
//! parses completely or not at all. What to do with a failed glyph is the
//! caller's decision, see [`config::ErrorPolicy`].

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod glyph;
pub mod number;
pub mod path;

#[cfg(test)]
mod proptests;

pub use config::{ErrorPolicy, ParseConfig};
pub use diagnostics::{CollectDiagnostics, DiagnosticEvent, Diagnostics, GlyphLabel, LogDiagnostics};
pub use error::{PathError, Result};
pub use glyph::GlyphPath;
pub use path::{parse_path, ParsedPath, PathParser};
pub use types::{Command, CommandKind, PathStep};

/// The data structures produced by the parser
pub mod types {
    use std::fmt;

    /// What a command draws, independent of letter case
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CommandKind {
        /// `M`
        MoveTo,
        /// `L`
        LineTo,
        /// `H`
        HorizontalLineTo,
        /// `V`
        VerticalLineTo,
        /// `C`
        CurveTo,
        /// `S`
        SmoothCurveTo,
        /// `Q`
        QuadTo,
        /// `T`
        SmoothQuadTo,
        /// `A`
        Arc,
        /// `Z`
        ClosePath,
    }

    impl CommandKind {
        /// The upper-case letter for this kind
        pub const fn letter(self) -> char {
            match self {
                CommandKind::MoveTo => 'M',
                CommandKind::LineTo => 'L',
                CommandKind::HorizontalLineTo => 'H',
                CommandKind::VerticalLineTo => 'V',
                CommandKind::CurveTo => 'C',
                CommandKind::SmoothCurveTo => 'S',
                CommandKind::QuadTo => 'Q',
                CommandKind::SmoothQuadTo => 'T',
                CommandKind::Arc => 'A',
                CommandKind::ClosePath => 'Z',
            }
        }
    }

    /// A command letter: its kind plus whether it was written in lower case
    ///
    /// Lower case means relative coordinates in SVG. The parser never
    /// interprets that, it only keeps it so the letter round-trips.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Command {
        kind: CommandKind,
        relative: bool,
    }

    impl Command {
        pub const fn new(kind: CommandKind, relative: bool) -> Self {
            Self { kind, relative }
        }

        /// Recognize one of the twenty command letters
        pub fn from_letter(letter: char) -> Option<Self> {
            let kind = match letter.to_ascii_uppercase() {
                'M' => CommandKind::MoveTo,
                'L' => CommandKind::LineTo,
                'H' => CommandKind::HorizontalLineTo,
                'V' => CommandKind::VerticalLineTo,
                'C' => CommandKind::CurveTo,
                'S' => CommandKind::SmoothCurveTo,
                'Q' => CommandKind::QuadTo,
                'T' => CommandKind::SmoothQuadTo,
                'A' => CommandKind::Arc,
                'Z' => CommandKind::ClosePath,
                _ => return None,
            };
            Some(Self::new(kind, letter.is_ascii_lowercase()))
        }

        pub const fn kind(self) -> CommandKind {
            self.kind
        }

        pub const fn is_relative(self) -> bool {
            self.relative
        }

        pub const fn is_close(self) -> bool {
            matches!(self.kind, CommandKind::ClosePath)
        }

        /// The letter exactly as it appeared in the path data
        pub const fn letter(self) -> char {
            let upper = self.kind.letter();
            if self.relative {
                upper.to_ascii_lowercase()
            } else {
                upper
            }
        }
    }

    impl fmt::Display for Command {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.letter())
        }
    }

    /// One drawing instruction of a glyph outline
    #[derive(Debug, Clone, PartialEq)]
    pub struct PathStep {
        command: Command,
        parameters: Vec<f64>,
    }

    impl PathStep {
        pub fn new(command: Command, parameters: Vec<f64>) -> Self {
            Self {
                command,
                parameters,
            }
        }

        /// A close step; `upper` selects `Z` over `z`
        pub fn close(upper: bool) -> Self {
            Self::new(Command::new(CommandKind::ClosePath, !upper), Vec::new())
        }

        pub fn command(&self) -> Command {
            self.command
        }

        pub fn letter(&self) -> char {
            self.command.letter()
        }

        /// Operands in the order they were written; empty for close steps
        pub fn parameters(&self) -> &[f64] {
            &self.parameters
        }

        pub fn is_close(&self) -> bool {
            self.command.is_close()
        }
    }

}
