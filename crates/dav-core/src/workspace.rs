//! Per-document diagnostic bookkeeping.
//!
//! Each validation pass is authoritative for its whole document, so the store replaces a
//! document's diagnostic list wholesale instead of merging into it.

use crate::diagnostics::Diagnostic;
use std::collections::BTreeMap;

/// Latest diagnostics for each open document, keyed by URI.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticStore {
    documents: BTreeMap<String, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents with a recorded diagnostic set.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if no document has been recorded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Overwrite the diagnostics of `uri`, returning the previous set.
    pub fn replace(
        &mut self,
        uri: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
    ) -> Option<Vec<Diagnostic>> {
        self.documents.insert(uri.into(), diagnostics)
    }

    /// Diagnostics of `uri`, if recorded.
    pub fn get(&self, uri: &str) -> Option<&[Diagnostic]> {
        self.documents.get(uri).map(Vec::as_slice)
    }

    /// Forget `uri` (e.g. when the document is closed).
    pub fn remove(&mut self, uri: &str) -> Option<Vec<Diagnostic>> {
        self.documents.remove(uri)
    }

    /// Total errors across all documents.
    pub fn error_count(&self) -> usize {
        self.all().filter(|d| d.is_error()).count()
    }

    /// Total warnings across all documents.
    pub fn warning_count(&self) -> usize {
        self.all().filter(|d| d.is_warning()).count()
    }

    /// Documents and their diagnostics, ordered by URI.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Diagnostic])> {
        self.documents
            .iter()
            .map(|(uri, diags)| (uri.as_str(), diags.as_slice()))
    }

    fn all(&self) -> impl Iterator<Item = &Diagnostic> {
        self.documents.values().flatten()
    }
}
