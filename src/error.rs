//! Error types for detection and the build hook
//!
//! Two classes of failure exist and callers must be able to tell them apart:
//! usage errors (bad arguments, nothing to check) and config/IO errors (the
//! checker itself could not run). Finding violations is neither; that outcome
//! travels through [`crate::models::DetectReport::has_errors`].

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Errors that can occur while running a check
#[derive(Debug, Error)]
pub enum CheckError {
    /// No input files were supplied
    #[error("no input files given")]
    NoInputFiles,

    /// A path given on the command line does not exist
    #[error("file or directory does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Expansion of the given paths produced no files to check
    #[error("no JS files found")]
    NoFilesFound,

    /// The rule-configuration file is missing or not a regular file
    #[error("config file not readable: {0}")]
    ConfigNotFound(PathBuf),

    /// An exclude pattern is not a valid regular expression
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The file-search pattern is not a valid glob
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// IO error while reading a file for context rendering or sizing
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The lint engine failed to run or rejected the configuration
    #[error("lint engine error: {0}")]
    Engine(#[from] EngineError),
}

impl CheckError {
    /// Whether this is a usage error (bad arguments) rather than a
    /// config/IO failure of the checker itself
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::NoInputFiles | Self::PathNotFound(_) | Self::NoFilesFound
        )
    }
}
