//! Diagnostics data model.
//!
//! A validation pass produces an ordered `Vec<Diagnostic>` for a whole document. Diagnostics are
//! values: a host presents them (problems panel, gutter markers, underlines) and replaces the
//! previous set for the document with each new pass.

use dav_lang::ConstructKind;
use serde::Serialize;
use std::fmt;

/// A line/column range (`start..end`) in the document.
///
/// Lines are zero-based; columns count Unicode scalar values (`char`) from the start of the
/// line, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiagnosticRange {
    /// First line of the range.
    pub start_line: usize,
    /// Start column on `start_line` (inclusive).
    pub start_col: usize,
    /// Last line of the range.
    pub end_line: usize,
    /// End column on `end_line` (exclusive).
    pub end_col: usize,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// A range within a single line.
    pub fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self::new(line, start_col, line, end_col)
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Structural errors: unbalanced blocks and malformed statements.
    Error,
    /// Advisory style findings.
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// What a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// A closer line with no open construct of its kind.
    UnmatchedCloser,
    /// Constructs of one kind still open at end of file.
    UnclosedConstruct,
    /// Function opener with neither parameters nor terminator.
    MalformedFunction,
    /// Conditional opener without terminator.
    MalformedConditional,
    /// While-loop opener without terminator.
    MalformedWhileLoop,
    /// For-loop header without a `de ... à` / `from ... to` range or terminator.
    MalformedForLoop,
    /// Variable declaration without `appelé` / `called` or terminator.
    MalformedDeclaration,
    /// Assignment without `à` / `to` or terminator.
    MalformedAssignment,
    /// Display statement without an accepted terminator.
    DisplayTerminator,
    /// Unequal counts of `(` and `)` on one line.
    UnbalancedParentheses,
    /// Else marker with no open conditional (only when enabled).
    StrayElse,
}

impl DiagnosticCode {
    /// Stable identifier, e.g. `unmatched-closer`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnmatchedCloser => "unmatched-closer",
            Self::UnclosedConstruct => "unclosed-construct",
            Self::MalformedFunction => "malformed-function",
            Self::MalformedConditional => "malformed-conditional",
            Self::MalformedWhileLoop => "malformed-while-loop",
            Self::MalformedForLoop => "malformed-for-loop",
            Self::MalformedDeclaration => "malformed-declaration",
            Self::MalformedAssignment => "malformed-assignment",
            Self::DisplayTerminator => "display-terminator",
            Self::UnbalancedParentheses => "unbalanced-parentheses",
            Self::StrayElse => "stray-else",
        }
    }

    /// Severity every diagnostic with this code carries.
    pub fn severity(self) -> DiagnosticSeverity {
        match self {
            Self::DisplayTerminator | Self::UnbalancedParentheses | Self::StrayElse => {
                DiagnosticSeverity::Warning
            }
            _ => DiagnosticSeverity::Error,
        }
    }

    /// The malformed-opener code for `kind`.
    pub fn malformed_opener(kind: ConstructKind) -> Self {
        match kind {
            ConstructKind::Function => Self::MalformedFunction,
            ConstructKind::Conditional => Self::MalformedConditional,
            ConstructKind::WhileLoop => Self::MalformedWhileLoop,
            ConstructKind::ForLoop => Self::MalformedForLoop,
        }
    }

    /// Fixed message for codes that carry no parameters.
    pub(crate) fn shape_message(self) -> &'static str {
        match self {
            Self::MalformedFunction => {
                "Déclaration de fonction incorrecte : utilisez 'qui prend'/'that takes' ou terminez par un point."
            }
            Self::MalformedConditional => {
                "Condition Si/If incorrecte : la ligne doit se terminer par un point."
            }
            Self::MalformedWhileLoop => {
                "Boucle TantQue/While incorrecte : la ligne doit se terminer par un point."
            }
            Self::MalformedForLoop => {
                "Syntaxe Pour/For incorrecte : utilisez 'Pour ... de ... à ...' ou 'For ... from ... to ...' et terminez par un point."
            }
            Self::MalformedDeclaration => {
                "Déclaration de variable incorrecte : utilisez 'appelé'/'called' et terminez par un point."
            }
            Self::MalformedAssignment => {
                "Affectation incorrecte : utilisez 'à'/'to' et terminez par un point."
            }
            Self::DisplayTerminator => {
                "Affichage sans terminaison : terminez par 'line.', 'continue.' ou '.'."
            }
            Self::UnbalancedParentheses => "Parenthèses non équilibrées.",
            Self::StrayElse => "Sinon/Else sans Si/If ouvert.",
            Self::UnmatchedCloser => "Fermeture de bloc sans ouverture correspondante.",
            Self::UnclosedConstruct => "Bloc non fermé.",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic item for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic range.
    pub range: DiagnosticRange,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic whose severity follows from `code`.
    pub fn new(range: DiagnosticRange, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: code.severity(),
            code,
            message: message.into(),
        }
    }

    /// Returns `true` for [`DiagnosticSeverity::Error`].
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    /// Returns `true` for [`DiagnosticSeverity::Warning`].
    pub fn is_warning(&self) -> bool {
        self.severity == DiagnosticSeverity::Warning
    }
}
