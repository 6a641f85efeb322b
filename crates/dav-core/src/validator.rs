//! Structural validation.
//!
//! A single forward pass over a document's lines. Each construct kind has one non-negative
//! nesting counter; openers increment it, closers decrement it, and a closer met at depth zero is
//! reported where it stands. Whatever remains open after the last line is reported once per
//! kind, anchored at the final line.
//!
//! Malformed input is the expected product, not a failure: `validate` always completes and
//! returns every finding for the whole document, in discovery order.

use crate::classify::{LineKind, content_span, match_line};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange};
use dav_lang::{ConstructKind, DavSettings, ElseCheck};
use tracing::{debug, trace};

/// Per-construct nesting depth for one validation pass.
///
/// "Currently inside a construct" is `depth(kind) > 0`; there is no separate flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NestingState {
    depth: [usize; ConstructKind::COUNT],
}

impl NestingState {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current depth for `kind`.
    pub fn depth(&self, kind: ConstructKind) -> usize {
        self.depth[kind.index()]
    }

    /// Returns `true` while at least one construct of `kind` is open.
    pub fn is_open(&self, kind: ConstructKind) -> bool {
        self.depth(kind) > 0
    }

    /// Record an opener of `kind`.
    pub fn open(&mut self, kind: ConstructKind) {
        self.depth[kind.index()] += 1;
    }

    /// Record a closer of `kind`. Returns `false` (and leaves the counter at zero) if nothing
    /// of that kind was open.
    pub fn close(&mut self, kind: ConstructKind) -> bool {
        let depth = &mut self.depth[kind.index()];
        if *depth == 0 {
            return false;
        }
        *depth -= 1;
        true
    }

    /// Kinds with a non-zero counter, in [`ConstructKind::ALL`] order.
    pub fn residue(&self) -> impl Iterator<Item = (ConstructKind, usize)> + '_ {
        ConstructKind::ALL
            .into_iter()
            .map(|kind| (kind, self.depth(kind)))
            .filter(|(_, depth)| *depth > 0)
    }

    /// Returns `true` if every counter is zero.
    pub fn is_balanced(&self) -> bool {
        self.depth.iter().all(|d| *d == 0)
    }
}

/// Knobs for a validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Treatment of else markers outside a conditional.
    pub else_check: ElseCheck,
}

impl From<&DavSettings> for ValidatorOptions {
    fn from(settings: &DavSettings) -> Self {
        Self {
            else_check: settings.else_check,
        }
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Diagnostics in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Nesting counters after the last line.
    pub residue: NestingState,
}

impl ValidationReport {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Returns `true` if at least one error was found.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Structural validator for DAV documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Create a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate `lines` and return the diagnostics.
    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Diagnostic> {
        self.run(lines).diagnostics
    }

    /// Validate `lines` and return the diagnostics together with the final nesting state.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> ValidationReport {
        let mut state = NestingState::new();
        let mut diagnostics = Vec::new();

        for (line_no, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let matched = match_line(line);
            if !matched.kind.is_code() {
                continue;
            }

            let (start_col, end_col) = content_span(line);
            let range = DiagnosticRange::on_line(line_no, start_col, end_col);

            match matched.kind {
                LineKind::Opener(kind) => state.open(kind),
                LineKind::Closer(kind) => {
                    if !state.close(kind) {
                        trace!(line = line_no, ?kind, "closer without matching opener");
                        diagnostics.push(Diagnostic::new(
                            range,
                            DiagnosticCode::UnmatchedCloser,
                            format!("{} sans {} correspondant.", kind.closer_label(), kind.label()),
                        ));
                    }
                }
                LineKind::ElseMarker => {
                    if self.options.else_check == ElseCheck::Warn
                        && !state.is_open(ConstructKind::Conditional)
                    {
                        diagnostics.push(Diagnostic::new(
                            range,
                            DiagnosticCode::StrayElse,
                            DiagnosticCode::StrayElse.shape_message(),
                        ));
                    }
                }
                _ => {}
            }

            if let Some(code) = matched.shape {
                diagnostics.push(Diagnostic::new(range, code, code.shape_message()));
            }

            if !matched.balanced_parens {
                diagnostics.push(Diagnostic::new(
                    range,
                    DiagnosticCode::UnbalancedParentheses,
                    DiagnosticCode::UnbalancedParentheses.shape_message(),
                ));
            }
        }

        if let Some(last) = lines.len().checked_sub(1) {
            let end_col = lines[last].as_ref().chars().count();
            let range = DiagnosticRange::on_line(last, 0, end_col);
            for (kind, count) in state.residue() {
                let closer = kind.keywords().closer;
                diagnostics.push(Diagnostic::new(
                    range,
                    DiagnosticCode::UnclosedConstruct,
                    format!(
                        "{count} bloc(s) {} non fermé(s). Fermez avec {} ou {}",
                        kind.label(),
                        closer.french,
                        closer.english
                    ),
                ));
            }
        }

        let report = ValidationReport {
            diagnostics,
            residue: state,
        };
        debug!(
            lines = lines.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validated document"
        );
        report
    }
}

/// Validate `lines` with default options.
pub fn validate<S: AsRef<str>>(lines: &[S]) -> Vec<Diagnostic> {
    Validator::default().validate(lines)
}
