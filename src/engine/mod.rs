//! Lint engine boundary
//!
//! The detector never parses JavaScript itself; it drives an external
//! static-analysis engine through this narrow interface. The production
//! implementation lives in [`eslint`]; tests substitute a scripted fake.

pub mod eslint;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{FileLint, FileReport};

pub use eslint::EslintCli;

/// Errors raised by a lint engine implementation
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine binary could not be started
    #[error("failed to start lint engine: {0}")]
    Spawn(#[from] std::io::Error),

    /// The engine could not build a rule set from the configuration
    #[error("lint engine rejected configuration: {0}")]
    Config(String),

    /// The engine produced output this crate cannot parse
    #[error("unparseable lint engine output: {0}")]
    Output(String),
}

/// Static-analysis engine abstraction
///
/// Implementations lint a list of files under a rule configuration and render
/// result sets as human-readable text. One call to [`lint_files`] covers the
/// whole file list; the engine is never invoked per file.
///
/// [`lint_files`]: LintEngine::lint_files
pub trait LintEngine {
    /// Lint `files` under the configuration at `config_path`, with rule
    /// checking enabled and auto-fix disabled. Returns one entry per file,
    /// in input order, with diagnostics in engine-reported order.
    fn lint_files(
        &self,
        files: &[PathBuf],
        config_path: &Path,
    ) -> Result<Vec<FileLint>, EngineError>;

    /// Render a (filtered) result set as human-readable text
    fn format(&self, files: &[FileReport]) -> String;
}
