//! Build-integration hook
//!
//! Runs after a bundler finishes emitting output. Candidate files come from
//! the build's own asset list, never from a directory walk; the hook filters
//! them, runs the detector, and reports through the build's warning/error
//! channels. Each build's run is independent; no state survives between runs.

use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::Regex;

use crate::detector::{self, DetectOptions};
use crate::engine::LintEngine;
use crate::error::CheckError;

/// Extension of assets eligible for checking
const SCRIPT_EXTENSION: &str = ".js";

/// Hook configuration supplied by the build pipeline
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Rule-configuration file handed to the detector
    pub config_path: PathBuf,

    /// Escalate found violations to a build error instead of a warning
    pub fail_on_error: bool,

    /// Regexes tested against asset base filenames; matches are skipped
    pub exclude_patterns: Vec<String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(crate::rules::DEFAULT_CONFIG_FILE),
            fail_on_error: false,
            exclude_patterns: Vec::new(),
        }
    }
}

/// The host build's warning and error channels
///
/// Errors fail the build; warnings are visible but non-blocking.
#[derive(Debug, Default)]
pub struct BuildDiagnostics {
    /// Non-blocking notices
    pub warnings: Vec<String>,
    /// Build-failing conditions
    pub errors: Vec<String>,
}

impl BuildDiagnostics {
    /// Create empty channels for one build run
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Post-emit lifecycle hook
///
/// Filters `assets` down to existing `.js` files under `output_dir` minus the
/// exclude patterns, then runs the detector over them with full detail
/// output. An empty candidate set is recorded as a single warning and skips
/// detection. Found violations become one build error when
/// `config.fail_on_error` is set, one warning otherwise. A detector failure
/// (config or IO) is always pushed to `build.errors`, regardless of
/// `fail_on_error`, and returned to the caller.
///
/// # Errors
///
/// Returns [`CheckError`] when an exclude pattern is invalid or the detector
/// itself fails; the same condition is mirrored into `build.errors`.
pub fn after_emit(
    engine: &dyn LintEngine,
    output_dir: &Path,
    assets: &[String],
    config: &HookConfig,
    build: &mut BuildDiagnostics,
) -> Result<(), CheckError> {
    info!("[ES5CheckPlugin] checking emitted bundles for ES6+ syntax...");

    let candidates = match collect_candidates(output_dir, assets, &config.exclude_patterns) {
        Ok(candidates) => candidates,
        Err(err) => {
            build.errors.push(err.to_string());
            return Err(err);
        },
    };

    if candidates.is_empty() {
        let msg = "[ES5CheckPlugin] no JS files found in build output".to_string();
        info!("{msg}");
        build.warnings.push(msg);
        return Ok(());
    }

    info!("[ES5CheckPlugin] {} JS file(s) to check:", candidates.len());
    for file in &candidates {
        debug!("[ES5CheckPlugin] - {}", file.display());
    }

    let options = DetectOptions {
        config_path: config.config_path.clone(),
        verbose: true,
    };

    match detector::detect(engine, &candidates, &options) {
        Ok(report) if report.has_errors => {
            let msg = format!(
                "bundled output contains {} ES6+ syntax error(s)",
                report.total_errors()
            );
            if config.fail_on_error {
                build.errors.push(msg);
            } else {
                build.warnings.push(msg);
            }
            Ok(())
        },
        Ok(_) => {
            info!("[ES5CheckPlugin] check passed, all bundles are ES5");
            Ok(())
        },
        Err(err) => {
            // Config/IO failures are fatal to the build even in warning mode
            build.errors.push(err.to_string());
            Err(err)
        },
    }
}

/// Resolve asset names to checkable files: `.js` extension, existing under
/// `output_dir`, base filename not matching any exclude pattern
fn collect_candidates(
    output_dir: &Path,
    assets: &[String],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>, CheckError> {
    let excludes = exclude_patterns
        .iter()
        .map(|p| Regex::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut candidates = Vec::new();
    for asset in assets {
        if !asset.ends_with(SCRIPT_EXTENSION) {
            continue;
        }
        let path = output_dir.join(asset);
        if !path.is_file() {
            continue;
        }
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if excludes.iter().any(|re| re.is_match(&filename)) {
            debug!("[ES5CheckPlugin] excluded: {filename}");
            continue;
        }
        candidates.push(path);
    }
    Ok(candidates)
}
