//! Host settings for DAV tooling.
//!
//! Settings are read from TOML with kebab-case keys. Every key is optional:
//!
//! ```toml
//! tab-size = 4
//! preferred-language = "both"   # french | english | both
//! interpreter-path = "dav"
//! else-check = "unchecked"      # unchecked | warn
//! ```

use crate::keywords::LanguagePreference;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading [`DavSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    /// The settings file could not be read.
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    /// The settings text is not valid TOML for [`DavSettings`].
    Parse(#[from] toml::de::Error),

    #[error("tab-size must be at least 1")]
    /// `tab-size = 0` was requested.
    InvalidTabSize,
}

/// How the validator treats an else marker with no open conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElseCheck {
    /// Accept a stray else marker silently.
    #[default]
    Unchecked,
    /// Report a stray else marker as a warning.
    Warn,
}

/// Settings consumed by the analyzer and the command-line tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DavSettings {
    /// Columns added per nesting level.
    pub tab_size: usize,
    /// Keyword set offered by suggestion components.
    pub preferred_language: LanguagePreference,
    /// Program used to execute DAV files.
    pub interpreter_path: String,
    /// Policy for else markers outside a conditional.
    pub else_check: ElseCheck,
}

impl Default for DavSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            preferred_language: LanguagePreference::default(),
            interpreter_path: "dav".to_string(),
            else_check: ElseCheck::default(),
        }
    }
}

impl DavSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check invariants that the TOML schema cannot express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tab_size == 0 {
            return Err(SettingsError::InvalidTabSize);
        }
        Ok(())
    }
}
