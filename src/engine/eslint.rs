//! ESLint adapter
//!
//! Runs the `eslint` binary as a child process with JSON output and parses
//! the result array. Exit status 1 means findings were reported and is a
//! normal outcome; status 2 and above is how ESLint signals configuration
//! and fatal errors.

use std::path::{Path, PathBuf};
use std::process::Command;

use colored::Colorize;
use log::debug;
use serde::Deserialize;

use super::{EngineError, LintEngine};
use crate::models::{Diagnostic, FileLint, FileReport};

/// Default engine binary name, resolved through `PATH`
const DEFAULT_BINARY: &str = "eslint";

/// Lint engine backed by the ESLint command-line interface
#[derive(Debug, Clone)]
pub struct EslintCli {
    binary: PathBuf,
}

/// Wire format of one entry in ESLint's `--format json` output.
/// Count fields are deliberately not deserialized; they cover all rule
/// categories and must not leak into the filtered report.
#[derive(Debug, Deserialize)]
struct WireFileResult {
    #[serde(rename = "filePath")]
    file_path: PathBuf,
    messages: Vec<Diagnostic>,
}

impl EslintCli {
    /// Create an adapter using the `eslint` binary from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
        }
    }

    /// Create an adapter using a specific engine binary
    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for EslintCli {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine for EslintCli {
    fn lint_files(
        &self,
        files: &[PathBuf],
        config_path: &Path,
    ) -> Result<Vec<FileLint>, EngineError> {
        debug!("running {} over {} file(s)", self.binary.display(), files.len());

        let output = Command::new(&self.binary)
            .arg("--format")
            .arg("json")
            .arg("--no-eslintrc")
            .arg("--config")
            .arg(config_path)
            .arg("--no-fix")
            .args(files)
            .output()?;

        // 0 = clean, 1 = findings reported; both carry a valid JSON body
        match output.status.code() {
            Some(0 | 1) => {},
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(EngineError::Config(stderr));
            },
        }

        let results: Vec<WireFileResult> = serde_json::from_slice(&output.stdout)
            .map_err(|e| EngineError::Output(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|r| FileLint {
                path: r.file_path,
                diagnostics: r.messages,
            })
            .collect())
    }

    fn format(&self, files: &[FileReport]) -> String {
        let mut out = String::new();
        for file in files {
            if file.diagnostics.is_empty() {
                continue;
            }
            out.push_str(&format!("{}\n", file.path.display().to_string().underline()));
            for d in &file.diagnostics {
                let rule = d.rule_id.as_deref().unwrap_or("");
                out.push_str(&format!(
                    "  {:>4}:{:<4} {}  {}  {}\n",
                    d.line,
                    d.column,
                    "error".red(),
                    d.message,
                    rule.dimmed()
                ));
            }
            out.push('\n');
        }
        let total: usize = files.iter().map(|f| f.error_count).sum();
        if total > 0 {
            out.push_str(&format!(
                "{}\n",
                format!("{total} problem(s)").red().bold()
            ));
        }
        out
    }
}
