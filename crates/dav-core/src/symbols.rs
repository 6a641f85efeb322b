//! Document outline.
//!
//! Functions and variable declarations, extracted from the same line classification the
//! validator uses. Functions span from their opener to their matching closer; declarations made
//! while a function is open become its children.

use crate::classify::{LineKind, alternation, classify, connective, content_span, keyword_rest};
use dav_lang::ConstructKind;
use dav_lang::keywords::{CALLED, DECLARATION, TAKES_PARAMETERS};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| connective(r"^\s*([^\s.,;:()]+)"));
static PARAMETERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    connective(&format!(
        r"\b(?:{})\b\s*(.*?)\.?\s*$",
        alternation(TAKES_PARAMETERS)
    ))
});
static CALLED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    connective(&format!(
        r"\b(?:{})e?\s+([^\s.,;:()]+)",
        alternation(CALLED)
    ))
});

/// A line/column span of a symbol (columns in chars, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolRange {
    /// First line.
    pub start_line: usize,
    /// Start column on `start_line`.
    pub start_col: usize,
    /// Last line.
    pub end_line: usize,
    /// End column on `end_line`.
    pub end_col: usize,
}

impl SymbolRange {
    /// Create a new symbol range.
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

/// A coarse symbol kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A function defined with `Crée une fonction nommée` / `Create a function named`.
    Function,
    /// A variable declared with `J'ai` / `I have`.
    Variable,
}

/// A single document symbol node (hierarchical).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSymbol {
    /// Symbol name.
    pub name: String,
    /// Parameters of a function, or the description of a variable (`un nombre`).
    pub detail: Option<String>,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Full symbol span.
    pub range: SymbolRange,
    /// Span of the name itself.
    pub selection_range: SymbolRange,
    /// Child symbols.
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    /// Collect this node and all descendants in pre-order.
    pub fn flatten_preorder<'a>(&'a self, out: &mut Vec<&'a DocumentSymbol>) {
        out.push(self);
        for child in &self.children {
            child.flatten_preorder(out);
        }
    }

    /// Find all symbols with the given name (pre-order).
    pub fn find_by_name<'a>(&'a self, name: &str, out: &mut Vec<&'a DocumentSymbol>) {
        if self.name == name {
            out.push(self);
        }
        for child in &self.children {
            child.find_by_name(name, out);
        }
    }
}

/// A document outline (top-level symbol list).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DocumentOutline {
    /// Top-level symbols.
    pub symbols: Vec<DocumentSymbol>,
}

impl DocumentOutline {
    /// Create a new outline.
    pub fn new(symbols: Vec<DocumentSymbol>) -> Self {
        Self { symbols }
    }

    /// Returns true if there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Return the top-level symbol count.
    pub fn top_level_count(&self) -> usize {
        self.symbols.len()
    }

    /// Flatten all symbols in pre-order.
    pub fn flatten_preorder(&self) -> Vec<&DocumentSymbol> {
        let mut out = Vec::new();
        for sym in &self.symbols {
            sym.flatten_preorder(&mut out);
        }
        out
    }

    /// Find all symbols with the given name (pre-order).
    pub fn find_by_name(&self, name: &str) -> Vec<&DocumentSymbol> {
        let mut out = Vec::new();
        for sym in &self.symbols {
            sym.find_by_name(name, &mut out);
        }
        out
    }
}

/// Build the outline of a document.
pub fn outline<S: AsRef<str>>(lines: &[S]) -> DocumentOutline {
    let mut top = Vec::new();
    // One entry per open function; `None` for openers that yielded no name.
    let mut open: Vec<Option<DocumentSymbol>> = Vec::new();

    for (line_no, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        match classify(line) {
            LineKind::Opener(ConstructKind::Function) => {
                open.push(function_symbol(line_no, line));
            }
            LineKind::Closer(ConstructKind::Function) => {
                if let Some(Some(mut sym)) = open.pop() {
                    sym.range.end_line = line_no;
                    sym.range.end_col = content_span(line).1;
                    attach(&mut open, &mut top, sym);
                }
            }
            LineKind::Declaration => {
                if let Some(sym) = variable_symbol(line_no, line) {
                    attach(&mut open, &mut top, sym);
                }
            }
            _ => {}
        }
    }

    if let Some(last) = lines.len().checked_sub(1) {
        let end_col = lines[last].as_ref().chars().count();
        while let Some(entry) = open.pop() {
            let Some(mut sym) = entry else {
                continue;
            };
            sym.range.end_line = last;
            sym.range.end_col = end_col;
            attach(&mut open, &mut top, sym);
        }
    }

    DocumentOutline::new(top)
}

fn attach(
    open: &mut [Option<DocumentSymbol>],
    top: &mut Vec<DocumentSymbol>,
    sym: DocumentSymbol,
) {
    match open.iter_mut().rev().find_map(Option::as_mut) {
        Some(parent) => parent.children.push(sym),
        None => top.push(sym),
    }
}

fn function_symbol(line_no: usize, line: &str) -> Option<DocumentSymbol> {
    let (start_col, end_col) = content_span(line);
    let text = line.trim();
    let rest = keyword_rest(text, ConstructKind::Function.keywords().opener)?;
    let caps = NAME_RE.captures(rest)?;
    let name = caps.get(1)?;
    let name_offset = text.len() - rest.len() + name.start();

    let detail = PARAMETERS_RE
        .captures(rest)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());

    Some(DocumentSymbol {
        name: name.as_str().to_string(),
        detail,
        kind: SymbolKind::Function,
        range: SymbolRange::new(line_no, start_col, line_no, end_col),
        selection_range: name_range(line_no, start_col, text, name_offset, name.as_str()),
        children: Vec::new(),
    })
}

fn variable_symbol(line_no: usize, line: &str) -> Option<DocumentSymbol> {
    let (start_col, end_col) = content_span(line);
    let text = line.trim();
    let rest = keyword_rest(text, DECLARATION)?;
    let caps = CALLED_NAME_RE.captures(rest)?;
    let connective = caps.get(0)?;
    let name = caps.get(1)?;
    let name_offset = text.len() - rest.len() + name.start();

    let description = rest[..connective.start()].trim();
    let detail = (!description.is_empty()).then(|| description.to_string());

    Some(DocumentSymbol {
        name: name.as_str().to_string(),
        detail,
        kind: SymbolKind::Variable,
        range: SymbolRange::new(line_no, start_col, line_no, end_col),
        selection_range: name_range(line_no, start_col, text, name_offset, name.as_str()),
        children: Vec::new(),
    })
}

fn name_range(
    line_no: usize,
    content_start: usize,
    text: &str,
    name_offset: usize,
    name: &str,
) -> SymbolRange {
    let start = content_start + text[..name_offset].chars().count();
    SymbolRange::new(line_no, start, line_no, start + name.chars().count())
}
