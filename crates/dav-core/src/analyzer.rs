//! Settings-aware entry point bundling the analyzer operations.

use crate::diagnostics::Diagnostic;
use crate::indent::{IndentDecision, decide_indent, indent_columns};
use crate::line_index::LineIndex;
use crate::symbols::{DocumentOutline, outline};
use crate::validator::{ValidationReport, Validator, ValidatorOptions};
use crate::workspace::DiagnosticStore;
use dav_lang::{DavSettings, offered_keywords};

/// Validation, outline and indentation configured from one [`DavSettings`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    settings: DavSettings,
    validator: Validator,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DavSettings::default())
    }
}

impl Analyzer {
    /// Create an analyzer for `settings`.
    pub fn new(settings: DavSettings) -> Self {
        let validator = Validator::new(ValidatorOptions::from(&settings));
        Self {
            settings,
            validator,
        }
    }

    /// The settings in effect.
    pub fn settings(&self) -> &DavSettings {
        &self.settings
    }

    /// Validate document text.
    pub fn report(&self, text: &str) -> ValidationReport {
        self.validator.run(&LineIndex::from_text(text).lines())
    }

    /// Diagnostics for document text.
    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        self.report(text).diagnostics
    }

    /// Validate `text` and record the result for `uri`, replacing any earlier pass.
    pub fn refresh<'s>(
        &self,
        store: &'s mut DiagnosticStore,
        uri: &str,
        text: &str,
    ) -> &'s [Diagnostic] {
        store.replace(uri, self.diagnostics(text));
        store.get(uri).unwrap_or_default()
    }

    /// Outline of document text.
    pub fn outline(&self, text: &str) -> DocumentOutline {
        outline(&LineIndex::from_text(text).lines())
    }

    /// Indentation for a new line following `previous_line`, whose own indentation is measured
    /// from its leading whitespace.
    pub fn indent_after(&self, previous_line: &str, current_line: &str) -> IndentDecision {
        let tab_size = self.settings.tab_size;
        decide_indent(
            previous_line,
            indent_columns(previous_line, tab_size),
            current_line,
            tab_size,
        )
    }

    /// Keywords to offer for completion under the configured preference.
    pub fn offered_keywords(&self) -> Vec<&'static str> {
        offered_keywords(self.settings.preferred_language)
    }
}
