//! Hand a file to the external interpreter.
//!
//! Diagnostics are advisory: a file with structural errors is still run.

use anyhow::{Context, Result, bail};
use dav_core::Analyzer;
use std::path::Path;
use std::process::{Command, ExitCode};
use tracing::{info, warn};

pub const DAV_EXTENSION: &str = "dav";

pub fn run_file(analyzer: &Analyzer, file: &Path) -> Result<ExitCode> {
    if file.extension().and_then(|e| e.to_str()) != Some(DAV_EXTENSION) {
        bail!(
            "le fichier doit avoir l'extension .{DAV_EXTENSION}: {}",
            file.display()
        );
    }

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let report = analyzer.report(&text);
    if report.has_errors() {
        warn!(
            file = %file.display(),
            errors = report.error_count(),
            "running despite structural errors"
        );
    }

    let interpreter = &analyzer.settings().interpreter_path;
    info!(%interpreter, file = %file.display(), "starting interpreter");
    let status = Command::new(interpreter)
        .arg(file)
        .status()
        .with_context(|| format!("failed to start interpreter '{interpreter}'"))?;

    Ok(match status.code() {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}
