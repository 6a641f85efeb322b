//! Line classification.
//!
//! Every physical line maps to exactly one [`LineKind`], derived from its trimmed text. Rules are
//! an ordered table of `(predicate, shape check)` pairs evaluated top to bottom; the first
//! predicate that matches decides the kind. The shape check only *notes* a well-formedness
//! problem: judging it (and turning it into a diagnostic) is the validator's job.
//!
//! French and English keywords are synonyms: `Si x.` and `If x.` both classify as
//! `Opener(Conditional)`.

use crate::diagnostics::DiagnosticCode;
use dav_lang::ConstructKind;
use dav_lang::keywords::{
    ASSIGN_TO, ASSIGNMENT, Bilingual, CALLED, COMMENT_MARKER, DECLARATION, DISPLAY,
    DISPLAY_TERMINATORS, ELSE, RANGE_FROM, RANGE_TO, TAKES_PARAMETERS, TERMINATOR,
};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The classification of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "construct", rename_all = "kebab-case")]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `//`.
    Comment,
    /// Opens a construct.
    Opener(ConstructKind),
    /// Exact closer line of a construct.
    Closer(ConstructKind),
    /// `Sinon` / `Else`.
    ElseMarker,
    /// `J'ai ...` / `I have ...`
    Declaration,
    /// `Assigne ...` / `Set ...`
    Assignment,
    /// `Affiche ...` / `Display ...`
    Display,
    /// Any other line with balanced parentheses.
    PlainStatement,
    /// Any other line.
    Unrecognized,
}

impl LineKind {
    /// Returns `false` for blank and comment lines, which the validator skips.
    pub fn is_code(self) -> bool {
        !matches!(self, Self::Blank | Self::Comment)
    }

    /// Lines after which the next line is indented one level deeper.
    pub fn raises_indent(self) -> bool {
        matches!(self, Self::Opener(_) | Self::ElseMarker)
    }

    /// Lines that sit one level shallower than the line before them.
    pub fn lowers_indent(self) -> bool {
        matches!(self, Self::Closer(_) | Self::ElseMarker)
    }
}

/// Classification of a line together with what the shape checks noted about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// The line's kind.
    pub kind: LineKind,
    /// Well-formedness problem noted by the matching rule, if any.
    pub shape: Option<DiagnosticCode>,
    /// Whether `(` and `)` counts are equal. Always `true` for blank and comment lines.
    pub balanced_parens: bool,
}

struct LineRule {
    matches: fn(&str) -> Option<LineKind>,
    shape: fn(&str) -> Option<DiagnosticCode>,
}

static LINE_RULES: [LineRule; 11] = [
    LineRule {
        matches: blank,
        shape: no_shape,
    },
    LineRule {
        matches: comment,
        shape: no_shape,
    },
    LineRule {
        matches: function_opener,
        shape: function_shape,
    },
    LineRule {
        matches: conditional_opener,
        shape: conditional_shape,
    },
    LineRule {
        matches: while_opener,
        shape: while_shape,
    },
    LineRule {
        matches: for_opener,
        shape: for_shape,
    },
    LineRule {
        matches: closer,
        shape: no_shape,
    },
    LineRule {
        matches: else_marker,
        shape: no_shape,
    },
    LineRule {
        matches: declaration,
        shape: declaration_shape,
    },
    LineRule {
        matches: assignment,
        shape: assignment_shape,
    },
    LineRule {
        matches: display,
        shape: display_shape,
    },
];

static TAKES_PARAMETERS_RE: LazyLock<Regex> =
    LazyLock::new(|| connective(&format!(r"\b(?:{})\b", alternation(TAKES_PARAMETERS))));
static CALLED_RE: LazyLock<Regex> =
    LazyLock::new(|| connective(&format!(r"\b(?:{})e?\b", alternation(CALLED))));
static ASSIGN_TO_RE: LazyLock<Regex> =
    LazyLock::new(|| connective(&format!(r"\b(?:{})\b", alternation(ASSIGN_TO))));
static FOR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    connective(&format!(
        r"\b(?:{})\b.+\b(?:{})\b",
        alternation(RANGE_FROM),
        alternation(RANGE_TO)
    ))
});

pub(crate) fn alternation(words: Bilingual) -> String {
    words.both().map(regex::escape).join("|")
}

pub(crate) fn connective(pattern: &str) -> Regex {
    // Built from the static keyword tables; a failure here is a broken table.
    Regex::new(pattern).expect("keyword connective pattern must compile")
}

/// Classify one line of source text.
pub fn classify(line: &str) -> LineKind {
    match_line(line).kind
}

/// Classify one line and run the matching rule's shape check.
pub fn match_line(line: &str) -> LineMatch {
    let text = line.trim();
    let (kind, shape) = LINE_RULES
        .iter()
        .find_map(|rule| (rule.matches)(text).map(|kind| (kind, (rule.shape)(text))))
        .unwrap_or_else(|| fallback(text));

    LineMatch {
        kind,
        shape,
        balanced_parens: !kind.is_code() || parens_balanced(text),
    }
}

/// Column span (`start..end`, in chars) of the line's trimmed content.
pub fn content_span(line: &str) -> (usize, usize) {
    let start = line.chars().take_while(|c| c.is_whitespace()).count();
    (start, start + line.trim().chars().count())
}

/// `true` if `(` and `)` occur equally often.
pub fn parens_balanced(text: &str) -> bool {
    let open = text.chars().filter(|&c| c == '(').count();
    let close = text.chars().filter(|&c| c == ')').count();
    open == close
}

/// `true` if `text` starts with either spelling of `keyword` as a whole word.
pub fn starts_with_keyword(text: &str, keyword: Bilingual) -> bool {
    keyword_rest(text, keyword).is_some()
}

/// Text following either spelling of `keyword` at the start of `text`.
pub(crate) fn keyword_rest(text: &str, keyword: Bilingual) -> Option<&str> {
    keyword.both().into_iter().find_map(|k| {
        text.strip_prefix(k).filter(|rest| {
            rest.chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric() && c != '_' && c != '\'')
        })
    })
}

fn blank(text: &str) -> Option<LineKind> {
    text.is_empty().then_some(LineKind::Blank)
}

fn comment(text: &str) -> Option<LineKind> {
    text.starts_with(COMMENT_MARKER).then_some(LineKind::Comment)
}

fn opener(text: &str, kind: ConstructKind) -> Option<LineKind> {
    starts_with_keyword(text, kind.keywords().opener).then_some(LineKind::Opener(kind))
}

fn function_opener(text: &str) -> Option<LineKind> {
    opener(text, ConstructKind::Function)
}

fn conditional_opener(text: &str) -> Option<LineKind> {
    opener(text, ConstructKind::Conditional)
}

fn while_opener(text: &str) -> Option<LineKind> {
    opener(text, ConstructKind::WhileLoop)
}

fn for_opener(text: &str) -> Option<LineKind> {
    opener(text, ConstructKind::ForLoop)
}

fn closer(text: &str) -> Option<LineKind> {
    ConstructKind::ALL
        .into_iter()
        .find(|kind| kind.keywords().closer.both().contains(&text))
        .map(LineKind::Closer)
}

fn else_marker(text: &str) -> Option<LineKind> {
    starts_with_keyword(text, ELSE).then_some(LineKind::ElseMarker)
}

fn declaration(text: &str) -> Option<LineKind> {
    starts_with_keyword(text, DECLARATION).then_some(LineKind::Declaration)
}

fn assignment(text: &str) -> Option<LineKind> {
    starts_with_keyword(text, ASSIGNMENT).then_some(LineKind::Assignment)
}

fn display(text: &str) -> Option<LineKind> {
    starts_with_keyword(text, DISPLAY).then_some(LineKind::Display)
}

fn fallback(text: &str) -> (LineKind, Option<DiagnosticCode>) {
    let kind = if parens_balanced(text) {
        LineKind::PlainStatement
    } else {
        LineKind::Unrecognized
    };
    (kind, None)
}

fn terminated(text: &str) -> bool {
    text.ends_with(TERMINATOR)
}

fn malformed_unless(well_formed: bool, kind: ConstructKind) -> Option<DiagnosticCode> {
    (!well_formed).then(|| DiagnosticCode::malformed_opener(kind))
}

fn no_shape(_: &str) -> Option<DiagnosticCode> {
    None
}

fn function_shape(text: &str) -> Option<DiagnosticCode> {
    malformed_unless(
        TAKES_PARAMETERS_RE.is_match(text) || terminated(text),
        ConstructKind::Function,
    )
}

fn conditional_shape(text: &str) -> Option<DiagnosticCode> {
    malformed_unless(terminated(text), ConstructKind::Conditional)
}

fn while_shape(text: &str) -> Option<DiagnosticCode> {
    malformed_unless(terminated(text), ConstructKind::WhileLoop)
}

fn for_shape(text: &str) -> Option<DiagnosticCode> {
    malformed_unless(
        terminated(text) && FOR_RANGE_RE.is_match(text),
        ConstructKind::ForLoop,
    )
}

fn declaration_shape(text: &str) -> Option<DiagnosticCode> {
    (!(terminated(text) && CALLED_RE.is_match(text))).then_some(DiagnosticCode::MalformedDeclaration)
}

fn assignment_shape(text: &str) -> Option<DiagnosticCode> {
    (!(terminated(text) && ASSIGN_TO_RE.is_match(text)))
        .then_some(DiagnosticCode::MalformedAssignment)
}

fn display_shape(text: &str) -> Option<DiagnosticCode> {
    (!DISPLAY_TERMINATORS.iter().any(|t| text.ends_with(t)))
        .then_some(DiagnosticCode::DisplayTerminator)
}
