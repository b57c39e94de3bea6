//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::detector::{self, DetectOptions};
use crate::engine::EslintCli;
use crate::error::CheckError;
use crate::rules::DEFAULT_CONFIG_FILE;
use crate::walker;

/// es5check - verify that bundled JS artifacts contain only ES5 syntax
#[derive(Parser, Debug)]
#[command(
    name = "es5check",
    version,
    about = "Check JS files for ES6+ syntax",
    long_about = "Check JavaScript files for ES6+ syntax.\n\n\
                  Lints the given files with a strict ES5 rule configuration and\n\
                  reports only syntax-level findings, ignoring style output.\n\n\
                  Exit code 0 means no ES6+ syntax was found; 1 means violations\n\
                  were found or the check could not run.",
    after_help = "Examples:\n  \
                  es5check ./dist                   check every JS file under dist/\n  \
                  es5check --no-details ./dist      same, without source context\n  \
                  es5check ./dist/main.bundle.js    check one bundle"
)]
pub struct Cli {
    /// Rule-configuration file for the lint engine
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Suppress contextual source-line rendering
    #[arg(long)]
    pub no_details: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Files or directories to check (directories are expanded recursively)
    pub paths: Vec<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if cli.paths.is_empty() {
        return Err(CheckError::NoInputFiles.into());
    }

    let files = expand_paths(&cli.paths)?;
    if files.is_empty() {
        return Err(CheckError::NoFilesFound.into());
    }
    debug!("checking {} file(s)", files.len());

    let options = DetectOptions {
        config_path: cli.config,
        verbose: !cli.no_details,
    };

    let engine = EslintCli::new();
    let report = detector::detect(&engine, &files, &options)?;

    if report.has_errors {
        std::process::exit(1);
    }
    Ok(())
}

/// Expand positional arguments into a flat file list
///
/// Directories are walked for JS files; regular files pass through as given.
/// A nonexistent path is reported on stderr but does not abort the run as
/// long as something else remains to check.
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(walker::find_js_files(path, None, &[])?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            eprintln!("file or directory does not exist: {}", path.display());
        }
    }
    Ok(files)
}
