//! Non-fatal observations made while parsing glyphs
//!
//! Two things are worth telling an operator about but never change the
//! parse result: a glyph whose override path replaced its primary path,
//! and a glyph whose close count disagrees with its polarity marker.
//! Where those reports go is up to the [`Diagnostics`] sink passed to
//! [`GlyphPath::parse`](crate::GlyphPath::parse).

use std::fmt;

use parking_lot::Mutex;

/// How a glyph is named in diagnostics: its unicode attribute, quoted and
/// escaped, or `<nil>` when the glyph has none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLabel<'a>(pub Option<&'a str>);

impl GlyphLabel<'_> {
    pub fn unicode(&self) -> Option<&str> {
        self.0
    }
}

impl fmt::Display for GlyphLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(unicode) => write!(f, "\"{}\"", unicode.escape_default()),
            None => f.write_str("<nil>"),
        }
    }
}

/// Longest override text quoted in a notice, in characters
const PREVIEW_CHARS: usize = 32;

/// The start of `d_orig` as it appears in an override notice
fn preview(d_orig: &str) -> String {
    match d_orig.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{:?}...", &d_orig[..end]),
        None => format!("{d_orig:?}"),
    }
}

/// Receiver for parse diagnostics
///
/// Each method is called at most once per glyph parse. Implementations
/// must be shareable across threads because glyphs of one font may be
/// parsed in parallel.
pub trait Diagnostics: Send + Sync {
    /// The glyph's override path is being parsed instead of its primary path
    fn override_used(&self, glyph: GlyphLabel<'_>, d_orig: &str);

    /// More than one subpath was closed and the polarity marker is missing
    /// or has a different length
    fn polarity_mismatch(&self, glyph: GlyphLabel<'_>, closes: usize, marker: Option<&str>);
}

/// Sends diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn override_used(&self, glyph: GlyphLabel<'_>, d_orig: &str) {
        log::info!("using d-orig for glyph {}: {}", glyph, preview(d_orig));
    }

    fn polarity_mismatch(&self, glyph: GlyphLabel<'_>, closes: usize, marker: Option<&str>) {
        match marker {
            Some(marker) => log::warn!(
                "glyph={}, closes={}, gerber-lp={:?}",
                glyph,
                closes,
                marker
            ),
            None => log::warn!("glyph={}, closes={}, gerber-lp=<nil>", glyph, closes),
        }
    }
}

/// An owned record of one diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    OverrideUsed {
        glyph: Option<String>,
        d_orig: String,
    },
    PolarityMismatch {
        glyph: Option<String>,
        closes: usize,
        marker: Option<String>,
    },
}

impl DiagnosticEvent {
    pub fn glyph(&self) -> Option<&str> {
        match self {
            DiagnosticEvent::OverrideUsed { glyph, .. }
            | DiagnosticEvent::PolarityMismatch { glyph, .. } => glyph.as_deref(),
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = GlyphLabel(self.glyph());
        match self {
            DiagnosticEvent::OverrideUsed { d_orig, .. } => {
                write!(f, "using d-orig for glyph {label}: {}", preview(d_orig))
            },
            DiagnosticEvent::PolarityMismatch {
                closes,
                marker: Some(marker),
                ..
            } => write!(f, "glyph={label}, closes={closes}, gerber-lp={marker:?}"),
            DiagnosticEvent::PolarityMismatch { closes, .. } => {
                write!(f, "glyph={label}, closes={closes}, gerber-lp=<nil>")
            },
        }
    }
}

/// Keeps diagnostics in memory, optionally forwarding them to the log too
///
/// Event order follows emission order, which is only meaningful when
/// glyphs are parsed sequentially. A forwarding collector is what lets a
/// caller log every event as it happens and still summarize afterwards.
#[derive(Debug, Default)]
pub struct CollectDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
    forward: bool,
}

impl CollectDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also emit through [`LogDiagnostics`]
    pub fn forwarding() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            forward: true,
        }
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn overrides(&self) -> usize {
        self.count(|event| matches!(event, DiagnosticEvent::OverrideUsed { .. }))
    }

    pub fn polarity_mismatches(&self) -> usize {
        self.count(|event| matches!(event, DiagnosticEvent::PolarityMismatch { .. }))
    }

    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events.into_inner()
    }

    fn count(&self, pred: impl Fn(&DiagnosticEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|event| pred(event)).count()
    }
}

impl Diagnostics for CollectDiagnostics {
    fn override_used(&self, glyph: GlyphLabel<'_>, d_orig: &str) {
        if self.forward {
            LogDiagnostics.override_used(glyph, d_orig);
        }
        self.events.lock().push(DiagnosticEvent::OverrideUsed {
            glyph: glyph.unicode().map(str::to_string),
            d_orig: d_orig.to_string(),
        });
    }

    fn polarity_mismatch(&self, glyph: GlyphLabel<'_>, closes: usize, marker: Option<&str>) {
        if self.forward {
            LogDiagnostics.polarity_mismatch(glyph, closes, marker);
        }
        self.events.lock().push(DiagnosticEvent::PolarityMismatch {
            glyph: glyph.unicode().map(str::to_string),
            closes,
            marker: marker.map(str::to_string),
        });
    }
}
