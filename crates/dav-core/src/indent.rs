//! Indentation for a newly started line.
//!
//! The derivation is local: it looks only at the line just completed and the line about to
//! receive the cursor. It never consults document-wide nesting, so on malformed input it can
//! suggest an indent that is reasonable locally but inconsistent globally.

use crate::classify::classify;

/// Indentation to apply to a new line, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndentDecision {
    /// Number of columns of leading whitespace.
    pub columns: usize,
}

impl IndentDecision {
    /// The whitespace a host should insert (spaces only).
    pub fn whitespace(&self) -> String {
        " ".repeat(self.columns)
    }
}

/// Indentation (in columns) for the line after `previous_line`.
///
/// Starting from `previous_indent`:
/// - an opener or else marker on the previous line adds `tab_size`;
/// - a closer or else marker already typed on the current line removes `tab_size`.
///
/// Both adjustments may apply in one call. The result saturates at zero and at `usize::MAX`.
pub fn derive_indent(
    previous_line: &str,
    previous_indent: usize,
    current_line: &str,
    tab_size: usize,
) -> usize {
    let mut columns = previous_indent;
    if classify(previous_line).raises_indent() {
        columns = columns.saturating_add(tab_size);
    }
    if classify(current_line).lowers_indent() {
        columns = columns.saturating_sub(tab_size);
    }
    columns
}

/// [`derive_indent`] wrapped in an [`IndentDecision`].
pub fn decide_indent(
    previous_line: &str,
    previous_indent: usize,
    current_line: &str,
    tab_size: usize,
) -> IndentDecision {
    IndentDecision {
        columns: derive_indent(previous_line, previous_indent, current_line, tab_size),
    }
}

/// Visual width of a line's leading whitespace; tabs advance to the next multiple of `tab_size`.
pub fn indent_columns(line: &str, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut x: usize = 0;
    for ch in line.chars() {
        match ch {
            ' ' => x = x.saturating_add(1),
            '\t' => x = x.saturating_add(tab_size - x % tab_size),
            _ => break,
        }
    }
    x
}
