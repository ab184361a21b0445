//! Parse configuration
//!
//! Decides what a batch does when one glyph fails and whether glyphs are
//! parsed in parallel. Defaults can be changed through the environment:
//!
//! ```bash
//! SVGFONT_ON_ERROR=skip SVGFONT_PARALLEL=0 svgfont parse font.svg
//! ```
//!
//! Explicit settings (CLI flags, builder calls) override the environment.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the [`ErrorPolicy`]
pub const ON_ERROR_ENV: &str = "SVGFONT_ON_ERROR";

/// Environment variable toggling parallel glyph parsing
pub const PARALLEL_ENV: &str = "SVGFONT_PARALLEL";

/// What to do with the rest of a font when one glyph fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Stop and report the first failing glyph
    #[default]
    Abort,
    /// Leave the glyph out, record the failure, continue with the rest
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            other => Err(format!("unknown error policy {other:?} (expected abort or skip)")),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        })
    }
}

/// Settings for parsing every glyph of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub on_error: ErrorPolicy,
    pub parallel: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            parallel: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ParseConfig {
    /// Defaults adjusted by `SVGFONT_ON_ERROR` and `SVGFONT_PARALLEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults adjusted by whatever `lookup` returns for the two variables
    ///
    /// Unrecognized values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ON_ERROR_ENV) {
            match value.parse() {
                Ok(policy) => {
                    config.on_error = policy;
                    log::debug!("error policy {} via {}", policy, ON_ERROR_ENV);
                },
                Err(e) => log::warn!("ignoring {}: {}", ON_ERROR_ENV, e),
            }
        }

        if let Some(value) = lookup(PARALLEL_ENV) {
            match parse_flag(&value) {
                Some(parallel) => config.parallel = parallel,
                None => log::warn!("ignoring {}: unrecognized value {:?}", PARALLEL_ENV, value),
            }
        }

        config
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
