//! Path-data parsing: from a `d` attribute to ordered steps
//!
//! The parser walks the unconsumed suffix of the input and, at each
//! position, tries two recognizers in a fixed order:
//!
//! 1. a close command (`z` or `Z`) plus any trailing whitespace
//! 2. a command letter from `mlhvcsqta` (either case) followed by a
//!    greedy run of numeric tokens, at least one
//!
//! Whatever matches neither is fatal. The numeric run is handed to
//! [`scan_numbers`](crate::number::scan_numbers) as one unit.

use crate::error::{PathError, Result};
use crate::number::{is_space, next_token, scan_numbers};
use crate::types::{Command, PathStep};

/// Bytes consumed by a close command at the start of `s`
fn match_close(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'z' | b'Z') => Some(1 + bytes[1..].iter().take_while(|&&b| is_space(b)).count()),
        _ => None,
    }
}

/// Command and total bytes consumed by a general command at the start of `s`
fn match_command(s: &str) -> Option<(Command, usize)> {
    let command = s
        .chars()
        .next()
        .and_then(Command::from_letter)
        .filter(|command| !command.is_close())?;

    // Command letters are ASCII, so the run starts at byte 1
    let mut len = 1;
    let mut tokens = 0;
    while let Some(token) = next_token(&s[len..]) {
        len += token.len;
        tokens += 1;
    }

    (tokens > 0).then_some((command, len))
}

/// Streaming parser over one path-data string
///
/// Yields steps in drawing order. After the first error the iterator is
/// exhausted.
///
/// ```
/// use svgfont_core::path::PathParser;
///
/// let mut parser = PathParser::new("M10,20 L30 40 z");
/// let steps: Vec<_> = parser.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(steps.len(), 3);
/// assert_eq!(parser.closes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PathParser<'a> {
    source: &'a str,
    rest: &'a str,
    closes: usize,
}

impl<'a> PathParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
            closes: 0,
        }
    }

    /// Close commands seen so far
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Byte offset of the unconsumed suffix within the source
    pub fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn advance(&mut self, len: usize) {
        self.rest = &self.rest[len..];
    }

    fn next_step(&mut self) -> Result<PathStep> {
        if let Some(len) = match_close(self.rest) {
            let step = PathStep::close(self.rest.starts_with('Z'));
            self.closes += 1;
            self.advance(len);
            return Ok(step);
        }

        if let Some((command, len)) = match_command(self.rest) {
            let parameters = scan_numbers(&self.rest[1..len])?;
            self.advance(len);
            return Ok(PathStep::new(command, parameters));
        }

        Err(PathError::UnknownCommand {
            offset: self.offset(),
            remainder: self.rest.to_string(),
        })
    }
}

impl Iterator for PathParser<'_> {
    type Item = Result<PathStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let step = self.next_step();
        if step.is_err() {
            self.rest = "";
        }
        Some(step)
    }
}

/// A fully parsed path: its steps and how many subpaths were closed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPath {
    pub steps: Vec<PathStep>,
    pub closes: usize,
}

/// Parse a whole path-data string
///
/// Fails on the first unrecognized token; no partial result is returned.
pub fn parse_path(d: &str) -> Result<ParsedPath> {
    let mut parser = PathParser::new(d);
    let steps = parser.by_ref().collect::<Result<Vec<_>>>()?;
    log::trace!("parsed {} steps ({} closes)", steps.len(), parser.closes());

    Ok(ParsedPath {
        steps,
        closes: parser.closes(),
    })
}
