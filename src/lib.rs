//! es5check - post-build verification that bundled JavaScript artifacts
//! contain only ES5 syntax
//!
//! This library drives an external lint engine over compiled bundles, keeps
//! only the diagnostics that mean "modern syntax survived transpilation",
//! and reports pass/fail. It also provides a build-lifecycle hook that feeds
//! a bundler's emitted assets into the same check.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod detector;
pub mod engine;
pub mod error;
pub mod hook;
pub mod models;
pub mod output;
pub mod rules;
pub mod walker;
