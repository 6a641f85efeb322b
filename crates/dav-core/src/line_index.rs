//! Line splitting for whole documents.
//!
//! The analyzer works on an ordered sequence of physical lines. `LineIndex` wraps a `Rope` so a
//! host holding the full text can hand lines to the validator without re-scanning for breaks.

use ropey::Rope;

/// Logical line index backed by a rope.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Build a line index from document text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Returns `true` if the document has no text at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines, counting the empty line after a trailing newline.
    ///
    /// An empty document has zero lines.
    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rope.len_lines()
        }
    }

    /// Text of line `line` without its line terminator (`\n` or `\r\n`).
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }

    /// All lines, in order, without terminators.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|line| self.line_text(line))
            .collect()
    }
}
