#![warn(missing_docs)]
//! DAV Core - structural analyzer for the bilingual DAV scripting language
//!
//! # Overview
//!
//! DAV statements read like sentences and end with a period. Block constructs (function,
//! conditional, while-loop, for-loop) open with a keyword line and close with a matching
//! `Fin<Construct>.` / `End<Construct>.` line. Every keyword has a French and an English
//! spelling; both are always accepted.
//!
//! This crate is headless. It classifies lines, validates block structure, and derives
//! indentation; presenting diagnostics, running the interpreter and offering completions are
//! left to the host.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Analyzer (settings) / DiagnosticStore       │  ← Host-facing API
//! ├───────────────────────┬──────────────────────┤
//! │  Structural Validator │  Indentation Deriver │  ← Independent consumers
//! │  Document Outline     │                      │
//! ├───────────────────────┴──────────────────────┤
//! │  Line Classifier (bilingual keyword rules)   │  ← Leaf
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use dav_core::{DiagnosticCode, derive_indent, validate};
//!
//! let diagnostics = validate(&["Si x > 5.", "    Affiche x."]);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].code, DiagnosticCode::UnclosedConstruct);
//!
//! assert_eq!(derive_indent("Si x > 5.", 0, "", 4), 4);
//! assert_eq!(derive_indent("Si x > 5.", 0, "FinSi.", 4), 0);
//! ```
//!
//! # Module Description
//!
//! - [`classify`] - line classification
//! - [`validator`] - nesting validation and diagnostics
//! - [`indent`] - newline indentation
//! - [`symbols`] - document outline
//! - [`diagnostics`] - diagnostic data model
//! - [`workspace`] - per-document diagnostic store
//! - [`line_index`] - rope-backed line splitting
//!
//! All analysis functions are pure: each call owns its state, so documents can be analyzed
//! concurrently without coordination.

pub mod analyzer;
pub mod classify;
pub mod diagnostics;
pub mod indent;
pub mod line_index;
pub mod symbols;
pub mod validator;
pub mod workspace;

pub use analyzer::Analyzer;
pub use classify::{LineKind, LineMatch, classify, match_line};
pub use dav_lang::{ConstructKind, DavSettings, ElseCheck, LanguagePreference};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange, DiagnosticSeverity};
pub use indent::{IndentDecision, decide_indent, derive_indent, indent_columns};
pub use line_index::LineIndex;
pub use symbols::{DocumentOutline, DocumentSymbol, SymbolKind, SymbolRange, outline};
pub use validator::{NestingState, ValidationReport, Validator, ValidatorOptions, validate};
pub use workspace::DiagnosticStore;
