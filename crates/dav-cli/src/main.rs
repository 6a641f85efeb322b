//! `dav-tools` - command-line front end for the DAV analyzer.
//!
//! # Usage
//!
//! ```bash
//! dav-tools check programme.dav autre.dav
//! dav-tools check --format json programme.dav
//! dav-tools outline programme.dav
//! dav-tools indent --previous "Si x > 5." --current "FinSi."
//! dav-tools keywords --language french
//! dav-tools run programme.dav
//! ```
//!
//! Settings come from `--config <path>`, else `dav.toml` in the current directory, else the
//! built-in defaults. Set `RUST_LOG=debug` to see per-pass summaries on stderr.

mod cli;
mod report;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Format};
use dav_core::{Analyzer, DiagnosticStore, decide_indent, indent_columns};
use dav_lang::{DavSettings, offered_keywords};
use report::FileReport;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_SETTINGS_FILE: &str = "dav.toml";

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref(), cli.tab_size)?;
    let analyzer = Analyzer::new(settings);

    match cli.command {
        Command::Check { files, format } => check(&analyzer, &files, format),
        Command::Outline { file, format } => outline(&analyzer, &file, format),
        Command::Indent {
            previous,
            previous_indent,
            current,
        } => {
            let tab_size = analyzer.settings().tab_size;
            let previous_indent =
                previous_indent.unwrap_or_else(|| indent_columns(&previous, tab_size));
            let decision = decide_indent(&previous, previous_indent, &current, tab_size);
            println!("{}", decision.columns);
            Ok(ExitCode::SUCCESS)
        }
        Command::Keywords { language } => {
            let preference = language
                .map(Into::into)
                .unwrap_or(analyzer.settings().preferred_language);
            for keyword in offered_keywords(preference) {
                println!("{keyword}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { file } => run::run_file(&analyzer, &file),
    }
}

fn load_settings(config: Option<&Path>, tab_size: Option<usize>) -> Result<DavSettings> {
    let mut settings = match config {
        Some(path) => DavSettings::load(path)?,
        None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
            DavSettings::load(DEFAULT_SETTINGS_FILE)?
        }
        None => DavSettings::default(),
    };
    if let Some(tab_size) = tab_size {
        settings.tab_size = tab_size;
        settings.validate()?;
    }
    debug!(?settings, "loaded settings");
    Ok(settings)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn check(analyzer: &Analyzer, files: &[PathBuf], format: Format) -> Result<ExitCode> {
    let mut store = DiagnosticStore::new();
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let text = read(path)?;
        let diagnostics = analyzer.refresh(&mut store, &path.display().to_string(), &text);
        if format == Format::Text {
            for diagnostic in diagnostics {
                println!("{}", report::diagnostic_line(path, diagnostic));
            }
        }
        reports.push(FileReport {
            path,
            diagnostics: diagnostics.to_vec(),
        });
    }

    match format {
        Format::Text => println!(
            "{}",
            report::summary(store.error_count(), store.warning_count())
        ),
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(if store.error_count() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn outline(analyzer: &Analyzer, file: &Path, format: Format) -> Result<ExitCode> {
    let outline = analyzer.outline(&read(file)?);
    match format {
        Format::Text => print!("{}", report::outline_text(&outline)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&outline)?),
    }
    Ok(ExitCode::SUCCESS)
}
