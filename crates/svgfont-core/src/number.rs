//! Numeric token scanning for path operands
//!
//! The accepted grammar is deliberately narrow:
//!
//! ```text
//! token     := space* '-'? digit+ ( '.' digit* )? separator?
//! separator := ',' | '+' | space
//! space     := ' ' | '\t' | '\n' | '\r' | '\x0c'
//! ```
//!
//! Leading-dot decimals (`.5`), exponents (`1e3`) and explicit `+` signs
//! are rejected. A `+` is only ever consumed as a separator.

use crate::error::{PathError, Result};

pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c)
}

const fn is_separator(b: u8) -> bool {
    b == b',' || b == b'+' || is_space(b)
}

/// Byte layout of one numeric token at the start of a string
///
/// All offsets land on ASCII bytes, so slicing the source with them is
/// always valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    /// Where the literal starts (after leading whitespace)
    pub start: usize,
    /// Where the literal ends
    pub end: usize,
    /// Total bytes consumed, including one trailing separator
    pub len: usize,
}

impl Token {
    pub fn literal<'a>(&self, s: &'a str) -> &'a str {
        &s[self.start..self.end]
    }
}

/// Length of the numeric literal at the start of `bytes`
fn literal_len(bytes: &[u8]) -> Option<usize> {
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let integer = digits(i);
    if integer == 0 {
        return None;
    }
    i += integer;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        i += digits(i);
    }

    Some(i)
}

/// Recognize one numeric token at the start of `s`
pub(crate) fn next_token(s: &str) -> Option<Token> {
    let bytes = s.as_bytes();
    let start = bytes.iter().take_while(|&&b| is_space(b)).count();
    let end = start + literal_len(&bytes[start..])?;
    let len = match bytes.get(end) {
        Some(&b) if is_separator(b) => end + 1,
        _ => end,
    };

    Some(Token { start, end, len })
}

/// Convert one literal accepted by [`next_token`] into a value
fn parse_value(literal: &str) -> Result<f64> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PathError::Number {
            text: literal.to_string(),
        })
}

/// Scan a numeric run into its values, left to right
///
/// Every byte of `run` must belong to a token; anything else is reported
/// as [`PathError::Number`] carrying the unscanned remainder. An empty run
/// yields no values.
///
/// ```
/// use svgfont_core::number::scan_numbers;
///
/// assert_eq!(scan_numbers("10,-2.5 7.").unwrap(), vec![10.0, -2.5, 7.0]);
/// assert!(scan_numbers("").unwrap().is_empty());
/// assert!(scan_numbers(".5").is_err());
/// ```
pub fn scan_numbers(run: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut rest = run;

    while !rest.is_empty() {
        let token = next_token(rest).ok_or_else(|| PathError::Number {
            text: rest.to_string(),
        })?;
        values.push(parse_value(token.literal(rest))?);
        rest = &rest[token.len..];
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_layout() {
        let token = next_token("  -12.5, 3").unwrap();
        assert_eq!(token, Token { start: 2, end: 7, len: 8 });
        assert_eq!(token.literal("  -12.5, 3"), "-12.5");
    }

    #[test]
    fn test_token_without_separator() {
        let token = next_token("42L").unwrap();
        assert_eq!(token, Token { start: 0, end: 2, len: 2 });
    }

    #[test]
    fn test_only_one_separator_is_consumed() {
        let token = next_token("1,,2").unwrap();
        assert_eq!(token.len, 2);
        assert!(scan_numbers("1,,2").is_err());
    }

    #[test]
    fn test_adjacent_negatives() {
        assert_eq!(scan_numbers("10-5-0.25").unwrap(), vec![10.0, -5.0, -0.25]);
    }

    #[test]
    fn test_plus_is_a_separator_not_a_sign() {
        assert_eq!(scan_numbers("1+2").unwrap(), vec![1.0, 2.0]);
        assert!(next_token("+2").is_none());
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(scan_numbers("3.").unwrap(), vec![3.0]);
    }

    #[test]
    fn test_rejects_wider_svg_grammar() {
        assert!(next_token(".5").is_none());
        assert!(next_token("-").is_none());
        // "1e3" scans "1" and then fails on the exponent
        let err = scan_numbers("1e3").unwrap_err();
        assert_eq!(err, PathError::Number { text: "e3".into() });
        assert!(err.is_defect());
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let huge = "9".repeat(400);
        let err = scan_numbers(&huge).unwrap_err();
        assert!(matches!(err, PathError::Number { .. }));
    }

    #[test]
    fn test_whitespace_runs_between_values() {
        assert_eq!(scan_numbers("1 \t\n 2").unwrap(), vec![1.0, 2.0]);
    }
}
