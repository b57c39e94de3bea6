//! Result types for a detection run
//!
//! All values here live for a single invocation: built from one engine run,
//! consumed by the caller, then dropped. Nothing is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One finding reported by the lint engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule identifier; `None` for fatal parse errors
    #[serde(rename = "ruleId")]
    pub rule_id: Option<String>,

    /// Line number (1-based)
    #[serde(default)]
    pub line: u32,

    /// Column number (1-based)
    #[serde(default)]
    pub column: u32,

    /// Human-readable description of the finding
    pub message: String,
}

/// Raw per-file engine output, before allow-list filtering
#[derive(Debug, Clone)]
pub struct FileLint {
    /// The linted file
    pub path: PathBuf,

    /// All diagnostics the engine reported, in engine order
    pub diagnostics: Vec<Diagnostic>,
}

/// One file's outcome after allow-list filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The linted file
    pub path: PathBuf,

    /// Diagnostics whose rule matched the allow-list, engine order preserved
    pub diagnostics: Vec<Diagnostic>,

    /// Count recomputed from `diagnostics`; the engine's own count includes
    /// unrelated style findings and is never reused
    pub error_count: usize,
}

/// Aggregate outcome of one detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectReport {
    /// True iff at least one file has a non-zero `error_count`
    pub has_errors: bool,

    /// One entry per input file, in input order
    pub files: Vec<FileReport>,
}

impl DetectReport {
    /// Total number of matching diagnostics across all files
    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.error_count).sum()
    }
}
