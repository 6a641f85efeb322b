//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use dav_lang::LanguagePreference;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dav-tools")]
#[command(about = "Structural checks, outline and indentation for DAV scripts")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to `dav.toml` in the current directory, if present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured tab size.
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub tab_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate block structure and statement shapes
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print functions and variable declarations
    Outline {
        /// File to outline
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Compute the indentation of a new line
    Indent {
        /// Text of the line just completed
        #[arg(long)]
        previous: String,

        /// Indentation of the previous line, in columns (measured from `--previous` if omitted)
        #[arg(long)]
        previous_indent: Option<usize>,

        /// Text already present on the new line
        #[arg(long, default_value = "")]
        current: String,
    },
    /// List the keywords offered for completion
    Keywords {
        /// Keyword language (defaults to the configured preference)
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
    },
    /// Execute a `.dav` file with the configured interpreter
    Run {
        /// File to execute
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageArg {
    French,
    English,
    Both,
}

impl From<LanguageArg> for LanguagePreference {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::French => Self::French,
            LanguageArg::English => Self::English,
            LanguageArg::Both => Self::Both,
        }
    }
}
