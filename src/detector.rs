//! Legacy-syntax detector
//!
//! Drives the lint engine over a set of files and decides whether any of them
//! still contains ES6+ syntax. The engine reports everything its rule
//! configuration covers; only diagnostics matching the allow-list in
//! [`crate::rules`] count toward the verdict, and all counts are recomputed
//! from the filtered set.
//!
//! Finding violations is a normal negative outcome carried by
//! [`DetectReport::has_errors`]; an `Err` return means the check itself could
//! not run.

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::engine::LintEngine;
use crate::error::CheckError;
use crate::models::{DetectReport, FileReport};
use crate::output;
use crate::rules::{self, DEFAULT_CONFIG_FILE};

/// Options for a detection run
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Rule-configuration file handed to the lint engine
    pub config_path: PathBuf,

    /// Render surrounding source lines for every finding
    pub verbose: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            verbose: true,
        }
    }
}

/// Check whether `files` contain ES6+ syntax
///
/// Invokes the engine once over the whole file list, filters each file's
/// diagnostics through the allow-list predicate, and aggregates the result in
/// input order. Prints a formatted report (with source context when
/// `verbose`), a pass/fail banner, and per-file sizes.
///
/// # Errors
///
/// - [`CheckError::NoInputFiles`] when `files` is empty
/// - [`CheckError::ConfigNotFound`] when the configuration is not a readable file
/// - [`CheckError::Io`] when a file cannot be read for context rendering or sizing
/// - [`CheckError::Engine`] when the engine fails or rejects the configuration
pub fn detect(
    engine: &dyn LintEngine,
    files: &[PathBuf],
    options: &DetectOptions,
) -> Result<DetectReport, CheckError> {
    if files.is_empty() {
        return Err(CheckError::NoInputFiles);
    }
    if !options.config_path.is_file() {
        return Err(CheckError::ConfigNotFound(options.config_path.clone()));
    }

    debug!(
        "linting {} file(s) with config {}",
        files.len(),
        options.config_path.display()
    );

    let raw = engine.lint_files(files, &options.config_path)?;

    let reports: Vec<FileReport> = raw
        .into_iter()
        .map(|file| {
            let diagnostics: Vec<_> = file
                .diagnostics
                .into_iter()
                .filter(|d| d.rule_id.as_deref().is_some_and(rules::is_es6_syntax_rule))
                .collect();
            let error_count = diagnostics.len();
            FileReport {
                path: file.path,
                diagnostics,
                error_count,
            }
        })
        .collect();

    let has_errors = reports.iter().any(|r| r.error_count > 0);

    if has_errors {
        output::print_failure_banner();
        println!("{}", engine.format(&reports));

        if options.verbose {
            println!("\n[ES5Check] detailed findings:");
            for report in reports.iter().filter(|r| r.error_count > 0) {
                println!("\nfile: {}", report.path.display());
                print_details(report)?;
            }
        }
    } else {
        output::print_pass_banner();
    }

    output::print_file_sizes(files)?;

    Ok(DetectReport {
        has_errors,
        files: reports,
    })
}

fn print_details(report: &FileReport) -> Result<(), CheckError> {
    let source = fs::read_to_string(&report.path)?;
    for diagnostic in &report.diagnostics {
        print!("{}", output::render_context(&source, diagnostic));
    }
    Ok(())
}
