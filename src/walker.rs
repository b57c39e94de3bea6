//! File discovery for the command-line surface
//!
//! Expands a directory argument into the JS files beneath it. The build hook
//! never uses this; it gets its file list from the build's asset table.

use std::path::{Path, PathBuf};

use glob::glob;
use regex::Regex;

use crate::error::CheckError;

/// Default search pattern: every JS file, recursively
const DEFAULT_PATTERN: &str = "**/*.js";

/// Find JS files under `dir`
///
/// `pattern` overrides the default recursive glob. `exclude_patterns` are
/// regexes tested against each base filename; matches are dropped. Results
/// are absolute paths in glob order.
///
/// # Errors
///
/// Returns [`CheckError::Glob`] or [`CheckError::Pattern`] for invalid
/// patterns and [`CheckError::Io`] if the directory cannot be resolved.
pub fn find_js_files(
    dir: &Path,
    pattern: Option<&str>,
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>, CheckError> {
    let excludes = exclude_patterns
        .iter()
        .map(|p| Regex::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let root = dir.canonicalize()?;
    let full_pattern = root.join(pattern.unwrap_or(DEFAULT_PATTERN));

    let mut files = Vec::new();
    for entry in glob(&full_pattern.to_string_lossy())? {
        // Unreadable entries are skipped, not fatal
        let Ok(path) = entry else { continue };
        if !path.is_file() {
            continue;
        }
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if excludes.iter().any(|re| re.is_match(&filename)) {
            continue;
        }
        files.push(path);
    }
    Ok(files)
}
