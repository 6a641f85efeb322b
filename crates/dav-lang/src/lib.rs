#![warn(missing_docs)]
//! `dav-lang` - data-driven language configuration for the DAV scripting language.
//!
//! DAV accepts two surface syntaxes (French and English) for one grammar. This crate holds the
//! keyword tables for both, the language-preference filter used when *offering* keywords, and
//! the host settings. It intentionally stays free of any matching logic: `dav-core` owns the
//! classifier, validator and indentation rules built on top of these tables.

pub mod keywords;
pub mod settings;

pub use keywords::{
    Bilingual, ConstructKeywords, ConstructKind, Language, LanguagePreference, offered_keywords,
};
pub use settings::{DavSettings, ElseCheck, SettingsError};
