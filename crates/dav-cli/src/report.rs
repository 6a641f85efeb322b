//! Human-readable and JSON renderings of analyzer output.

use dav_core::{Diagnostic, DocumentOutline, DocumentSymbol, SymbolKind};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Diagnostics of one checked file.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub path: &'a Path,
    pub diagnostics: Vec<Diagnostic>,
}

/// `path:line:col: severity[code]: message`, 1-based.
pub fn diagnostic_line(path: &Path, diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{}:{}: {}[{}]: {}",
        path.display(),
        diagnostic.range.start_line + 1,
        diagnostic.range.start_col + 1,
        diagnostic.severity,
        diagnostic.code,
        diagnostic.message
    )
}

pub fn summary(errors: usize, warnings: usize) -> String {
    format!("{errors} erreur(s), {warnings} avertissement(s)")
}

pub fn outline_text(outline: &DocumentOutline) -> String {
    let mut out = String::new();
    for symbol in &outline.symbols {
        write_symbol(&mut out, symbol, 0);
    }
    out
}

fn write_symbol(out: &mut String, symbol: &DocumentSymbol, depth: usize) {
    let kind = match symbol.kind {
        SymbolKind::Function => "fonction",
        SymbolKind::Variable => "variable",
    };
    let _ = write!(
        out,
        "{}{kind} {} [{}-{}]",
        "  ".repeat(depth),
        symbol.name,
        symbol.range.start_line + 1,
        symbol.range.end_line + 1
    );
    if let Some(detail) = &symbol.detail {
        let _ = write!(out, " ({detail})");
    }
    out.push('\n');
    for child in &symbol.children {
        write_symbol(out, child, depth + 1);
    }
}
